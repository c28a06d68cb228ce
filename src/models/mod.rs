//! Data structures for the scoreboard: teams, games, matches, session state.

mod game;
mod ids;
mod scoreboard;
mod team;

pub use game::{Game, Match, MatchFormat, MatchId, Score, Series, GAMES_PER_SERIES, GAMES_TO_WIN_SERIES};
pub use ids::{IdProvider, RandomIds, SequentialIds};
pub use scoreboard::{PairingMode, Scoreboard, ScoreboardError, ScoreboardId};
pub use team::{Side, Team, TeamId};
