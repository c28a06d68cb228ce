//! Score, Game, Series and Match for single-game and best-of-three play.

use crate::models::team::{Side, Team};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Number of games in a best-of-three series.
pub const GAMES_PER_SERIES: usize = 3;

/// Games a side must win to take a best-of-three series.
pub const GAMES_TO_WIN_SERIES: u32 = 2;

/// A pair of counters, one per side. Points inside a game, games won inside a series.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub a: u32,
    pub b: u32,
}

impl Score {
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    /// Copy of this score with one more for `side`.
    pub fn plus_one(self, side: Side) -> Self {
        match side {
            Side::A => Self::new(self.a + 1, self.b),
            Side::B => Self::new(self.a, self.b + 1),
        }
    }

    /// Side with the strictly higher count, if any.
    pub fn leader(&self) -> Option<Side> {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// One game: running point totals and the winning side once decided.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub score: Score,
    /// None while the game is being played. The loser is always the other side.
    pub winner: Option<Side>,
}

impl Game {
    pub fn is_complete(&self) -> bool {
        self.winner.is_some()
    }

    pub fn loser(&self) -> Option<Side> {
        self.winner.map(Side::other)
    }
}

/// State of a best-of-three match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub games: [Game; GAMES_PER_SERIES],
    /// Index of the game being played (0..=2). Stays put once the series is decided.
    pub current_game: usize,
    /// Games won per side; always equals the count of `games` won by each side.
    pub games_won: Score,
    pub winner: Option<Side>,
}

impl Series {
    pub fn active_game(&self) -> &Game {
        &self.games[self.current_game]
    }

    /// Games that have been decided, in play order.
    pub fn played_games(&self) -> impl Iterator<Item = &Game> {
        self.games.iter().filter(|g| g.is_complete())
    }
}

/// How a match is scored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchFormat {
    /// One game; the match score is the raw point totals.
    Single(Game),
    /// Three games, first to win two; the match score is games won.
    BestOfThree(Series),
}

/// A match between two distinct teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub team_a: Team,
    pub team_b: Team,
    pub format: MatchFormat,
}

impl Match {
    /// New single-game match at 0-0.
    pub fn single(id: MatchId, team_a: Team, team_b: Team) -> Self {
        Self {
            id,
            team_a,
            team_b,
            format: MatchFormat::Single(Game::default()),
        }
    }

    /// New best-of-three match: three 0-0 games, playing game 0.
    pub fn best_of_three(id: MatchId, team_a: Team, team_b: Team) -> Self {
        Self {
            id,
            team_a,
            team_b,
            format: MatchFormat::BestOfThree(Series::default()),
        }
    }

    pub fn is_best_of_three(&self) -> bool {
        matches!(self.format, MatchFormat::BestOfThree(_))
    }

    /// Aggregate score: points for a single game, games won for best-of-three.
    pub fn score(&self) -> Score {
        match &self.format {
            MatchFormat::Single(game) => game.score,
            MatchFormat::BestOfThree(series) => series.games_won,
        }
    }

    /// Point totals of the game currently (or last) being played.
    pub fn active_game(&self) -> &Game {
        match &self.format {
            MatchFormat::Single(game) => game,
            MatchFormat::BestOfThree(series) => series.active_game(),
        }
    }

    pub fn winner_side(&self) -> Option<Side> {
        match &self.format {
            MatchFormat::Single(game) => game.winner,
            MatchFormat::BestOfThree(series) => series.winner,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.winner_side().is_some()
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn winner(&self) -> Option<&Team> {
        self.winner_side().map(|side| self.team(side))
    }

    pub fn loser(&self) -> Option<&Team> {
        self.winner_side().map(|side| self.team(side.other()))
    }

    /// Both sides have reached the deuce threshold in the active game and nobody has won it yet.
    pub fn is_deuce(&self) -> bool {
        let game = self.active_game();
        !game.is_complete() && crate::logic::is_deuce(game.score)
    }
}
