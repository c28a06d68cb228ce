//! Scoreboard (one browser session's teams and matches), PairingMode and ScoreboardError.

use crate::logic::{apply_point, pair_teams, parse_teams};
use crate::models::game::{Match, MatchId};
use crate::models::ids::{IdProvider, RandomIds};
use crate::models::team::{Side, Team};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during scoreboard operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoreboardError {
    /// Fewer than 2 non-empty team names were entered.
    NotEnoughTeams { found: usize },
    /// No match with this id on the scoreboard.
    MatchNotFound(MatchId),
}

impl std::fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreboardError::NotEnoughTeams { .. } => write!(f, "Please enter at least 2 teams"),
            ScoreboardError::MatchNotFound(_) => write!(f, "Match not found"),
        }
    }
}

impl std::error::Error for ScoreboardError {}

/// Unique identifier for a scoreboard.
pub type ScoreboardId = Uuid;

/// How teams are paired into matches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingMode {
    /// Shuffle, then pair neighbours. Single-game matches.
    #[default]
    Random,
    /// Pair in entry order. Single-game matches.
    Sequential,
    /// Pair in entry order. Best-of-three matches.
    #[serde(alias = "bestOfThree")]
    BestOfThree,
}

impl PairingMode {
    /// Older two-way selector: a best-of-three checkbox, otherwise random singles.
    pub fn from_best_of_three(best_of_three: bool) -> Self {
        if best_of_three {
            PairingMode::BestOfThree
        } else {
            PairingMode::Random
        }
    }
}

/// Teams and matches for one session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scoreboard {
    pub id: ScoreboardId,
    pub mode: PairingMode,
    /// Teams in the order they were entered.
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
    pub created_at: DateTime<Utc>,
}

impl Scoreboard {
    /// Pair `teams` into a new scoreboard. Needs at least 2 teams.
    pub fn new<I: IdProvider, R: Rng + ?Sized>(
        teams: Vec<Team>,
        mode: PairingMode,
        ids: &mut I,
        rng: &mut R,
    ) -> Result<Self, ScoreboardError> {
        if teams.len() < 2 {
            return Err(ScoreboardError::NotEnoughTeams { found: teams.len() });
        }
        let matches = pair_teams(&teams, mode, ids, rng);
        Ok(Self {
            id: ids.next_id(),
            mode,
            teams,
            matches,
            created_at: Utc::now(),
        })
    }

    /// Parse newline-separated team names and pair them, with random ids and the thread RNG.
    pub fn from_input(input: &str, mode: PairingMode) -> Result<Self, ScoreboardError> {
        let mut ids = RandomIds;
        let teams = parse_teams(input, &mut ids)?;
        Self::new(teams, mode, &mut ids, &mut rand::thread_rng())
    }

    pub fn find_match(&self, match_id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Score one point for `side` in the given match and store the resulting match.
    /// A point on a completed match leaves it unchanged.
    pub fn score_point(&mut self, match_id: MatchId, side: Side) -> Result<&Match, ScoreboardError> {
        let slot = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(ScoreboardError::MatchNotFound(match_id))?;
        *slot = apply_point(slot, side);
        Ok(slot)
    }

    /// Throw away all scores and pair the same teams again (new match ids).
    pub fn restart<I: IdProvider, R: Rng + ?Sized>(&mut self, ids: &mut I, rng: &mut R) {
        self.matches = pair_teams(&self.teams, self.mode, ids, rng);
    }

    /// Every match has a winner.
    pub fn is_finished(&self) -> bool {
        self.matches.iter().all(Match::is_complete)
    }

    /// Winning teams of completed matches, in match order.
    pub fn winners(&self) -> Vec<&Team> {
        self.matches.iter().filter_map(Match::winner).collect()
    }
}
