//! Integration tests for team parsing and match pairing.

use match_scoreboard_web::{
    pair_teams, parse_teams, MatchFormat, PairingMode, SequentialIds, Team,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn teams(n: usize) -> Vec<Team> {
    let input: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
    parse_teams(&input.join("\n"), &mut SequentialIds::new()).unwrap()
}

fn names(m: &match_scoreboard_web::Match) -> (&str, &str) {
    (m.team_a.name.as_str(), m.team_b.name.as_str())
}

#[test]
fn produces_half_as_many_matches_as_teams() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 2..=9 {
        for mode in [
            PairingMode::Random,
            PairingMode::Sequential,
            PairingMode::BestOfThree,
        ] {
            let matches = pair_teams(&teams(n), mode, &mut SequentialIds::new(), &mut rng);
            assert_eq!(matches.len(), n / 2, "{n} teams, {mode:?}");
            for m in &matches {
                assert_ne!(m.team_a.id, m.team_b.id);
            }
        }
    }
}

#[test]
fn sequential_keeps_entry_order() {
    let mut rng = StdRng::seed_from_u64(1);
    let matches = pair_teams(&teams(5), PairingMode::Sequential, &mut SequentialIds::new(), &mut rng);
    let pairs: Vec<_> = matches.iter().map(names).collect();
    assert_eq!(pairs, [("T0", "T1"), ("T2", "T3")]);
    assert!(matches.iter().all(|m| matches!(m.format, MatchFormat::Single(_))));
}

#[test]
fn best_of_three_keeps_order_and_sets_up_three_games() {
    let mut rng = StdRng::seed_from_u64(1);
    let matches = pair_teams(&teams(4), PairingMode::BestOfThree, &mut SequentialIds::new(), &mut rng);
    let pairs: Vec<_> = matches.iter().map(names).collect();
    assert_eq!(pairs, [("T0", "T1"), ("T2", "T3")]);
    for m in &matches {
        let MatchFormat::BestOfThree(series) = &m.format else {
            panic!("expected best of three");
        };
        assert_eq!(series.current_game, 0);
        assert_eq!(series.games.len(), 3);
        assert!(series.games.iter().all(|g| !g.is_complete() && g.score.a == 0 && g.score.b == 0));
        assert!(!m.is_complete());
    }
}

#[test]
fn random_pairing_uses_every_team_once() {
    let input = teams(10);
    let mut rng = StdRng::seed_from_u64(42);
    let matches = pair_teams(&input, PairingMode::Random, &mut SequentialIds::new(), &mut rng);
    let seen: Vec<_> = matches
        .iter()
        .flat_map(|m| [m.team_a.id, m.team_b.id])
        .collect();
    let unique: HashSet<_> = seen.iter().copied().collect();
    assert_eq!(seen.len(), 10);
    assert_eq!(unique, input.iter().map(|t| t.id).collect::<HashSet<_>>());
}

#[test]
fn match_ids_are_fresh_and_input_is_untouched() {
    let input = teams(6);
    let before = input.clone();
    let mut ids = SequentialIds::new();
    // Skip past the ids handed to the teams so match ids cannot collide with them.
    for _ in 0..input.len() {
        let _ = match_scoreboard_web::IdProvider::next_id(&mut ids);
    }
    let mut rng = StdRng::seed_from_u64(3);
    let matches = pair_teams(&input, PairingMode::Random, &mut ids, &mut rng);
    assert_eq!(input, before);
    let match_ids: HashSet<_> = matches.iter().map(|m| m.id).collect();
    assert_eq!(match_ids.len(), matches.len());
    assert!(input.iter().all(|t| !match_ids.contains(&t.id)));
}
