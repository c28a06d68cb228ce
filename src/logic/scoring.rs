//! Game scoring rule: first to 21, or a 2-point lead once both sides reach 20.

use crate::models::{Score, Side};

/// Points that win a game outside deuce.
pub const GAME_POINT: u32 = 21;
/// Both sides at or above this means deuce.
pub const DEUCE_AT: u32 = 20;
/// Lead needed to win from deuce.
pub const WIN_MARGIN: u32 = 2;

/// Where a game stands for a given pair of point totals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameStatus {
    InPlay,
    /// Both sides at 20 or more without a 2-point lead.
    Deuce,
    Decided(Side),
}

impl GameStatus {
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Decided(side) => Some(side),
            GameStatus::InPlay | GameStatus::Deuce => None,
        }
    }
}

pub fn is_deuce(score: Score) -> bool {
    score.a >= DEUCE_AT && score.b >= DEUCE_AT
}

/// Decide a game from its point totals.
pub fn decide(score: Score) -> GameStatus {
    if is_deuce(score) {
        return match score.leader() {
            Some(side) if score.a.abs_diff(score.b) >= WIN_MARGIN => GameStatus::Decided(side),
            _ => GameStatus::Deuce,
        };
    }
    if score.a >= GAME_POINT {
        GameStatus::Decided(Side::A)
    } else if score.b >= GAME_POINT {
        GameStatus::Decided(Side::B)
    } else {
        GameStatus::InPlay
    }
}
