//! Pairing: build the round's matches from the entered teams.

use crate::models::{IdProvider, Match, PairingMode, Team};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pair teams into `teams.len() / 2` matches.
///
/// - `Random`: shuffle a copy (Fisher-Yates), then pair neighbours.
/// - `Sequential`: pair neighbours in entry order.
/// - `BestOfThree`: like `Sequential`, but every match is a best-of-three series.
///
/// With an odd number of teams the last one (after shuffling) gets no match.
pub fn pair_teams<I: IdProvider, R: Rng + ?Sized>(
    teams: &[Team],
    mode: PairingMode,
    ids: &mut I,
    rng: &mut R,
) -> Vec<Match> {
    let mut ordered = teams.to_vec();
    if mode == PairingMode::Random {
        ordered.shuffle(rng);
    }

    let matches: Vec<Match> = ordered
        .chunks_exact(2)
        .map(|pair| {
            let (team_a, team_b) = (pair[0].clone(), pair[1].clone());
            match mode {
                PairingMode::BestOfThree => Match::best_of_three(ids.next_id(), team_a, team_b),
                PairingMode::Random | PairingMode::Sequential => {
                    Match::single(ids.next_id(), team_a, team_b)
                }
            }
        })
        .collect();

    log::debug!(
        "Paired {} team(s) into {} {:?} match(es)",
        teams.len(),
        matches.len(),
        mode
    );
    matches
}
