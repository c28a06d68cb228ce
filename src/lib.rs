//! Tournament scoreboard web app: library with models and scoring logic.

pub mod logic;
pub mod models;

pub use logic::{
    apply_point, decide, export_results_csv, is_deuce, pair_teams, parse_teams, GameStatus,
    DEUCE_AT, GAME_POINT, WIN_MARGIN,
};
pub use models::{
    Game, IdProvider, Match, MatchFormat, MatchId, PairingMode, RandomIds, Score, Scoreboard,
    ScoreboardError, ScoreboardId, SequentialIds, Series, Side, Team, TeamId,
};
