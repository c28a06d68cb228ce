//! Scoreboard business logic: setup, pairing, scoring, progression, export.

mod export;
mod pairing;
mod progression;
mod scoring;
mod setup;

pub use export::{export_results_csv, RESULTS_HEADER};
pub use pairing::pair_teams;
pub use progression::apply_point;
pub use scoring::{decide, is_deuce, GameStatus, DEUCE_AT, GAME_POINT, WIN_MARGIN};
pub use setup::parse_teams;
