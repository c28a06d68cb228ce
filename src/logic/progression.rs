//! Match progression: apply one point and produce the next match state.

use crate::logic::scoring::decide;
use crate::models::{Game, Match, MatchFormat, Score, Series, Side, GAMES_TO_WIN_SERIES};

/// Score one point for `side` and return the updated match. The input is left untouched.
///
/// Completed matches come back unchanged. In a best-of-three the point goes to the
/// active game; when that game is decided the series either ends (2 games won) or
/// moves on to the next game.
pub fn apply_point(m: &Match, side: Side) -> Match {
    if m.is_complete() {
        return m.clone();
    }
    let format = match &m.format {
        MatchFormat::Single(game) => MatchFormat::Single(next_game(game, side)),
        MatchFormat::BestOfThree(series) => MatchFormat::BestOfThree(next_series(series, side)),
    };
    let next = Match {
        format,
        ..m.clone()
    };
    if let Some(winner) = next.winner() {
        log::info!(
            "Match {} won by {} ({}-{})",
            next.id,
            winner.name,
            next.score().a,
            next.score().b
        );
    }
    next
}

fn next_game(game: &Game, side: Side) -> Game {
    let score = game.score.plus_one(side);
    Game {
        score,
        winner: decide(score).winner(),
    }
}

fn next_series(series: &Series, side: Side) -> Series {
    let mut games = series.games;
    let active = series.current_game;
    games[active] = next_game(&games[active], side);

    let games_won = games.iter().fold(Score::default(), |won, game| match game.winner {
        Some(w) => won.plus_one(w),
        None => won,
    });
    let winner = [Side::A, Side::B]
        .into_iter()
        .find(|&s| games_won.get(s) >= GAMES_TO_WIN_SERIES);

    let current_game = if winner.is_none() && games[active].is_complete() {
        log::debug!("Game {} decided, moving to game {}", active + 1, active + 2);
        active + 1
    } else {
        active
    };

    Series {
        games,
        current_game,
        games_won,
        winner,
    }
}
