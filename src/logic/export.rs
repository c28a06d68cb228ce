//! CSV export of a scoreboard's results.

use crate::models::{MatchFormat, Scoreboard};

/// Column order of the export.
pub const RESULTS_HEADER: [&str; 8] = [
    "match", "format", "team_a", "team_b", "score_a", "score_b", "games", "winner",
];

/// One row per match. `games` lists decided best-of-three games as `21-15 18-21`;
/// `winner` is empty while a match is still running.
pub fn export_results_csv(scoreboard: &Scoreboard) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(RESULTS_HEADER)?;
    for (i, m) in scoreboard.matches.iter().enumerate() {
        let (format, games) = match &m.format {
            MatchFormat::Single(_) => ("single", String::new()),
            MatchFormat::BestOfThree(series) => (
                "best_of_three",
                series
                    .played_games()
                    .map(|g| format!("{}-{}", g.score.a, g.score.b))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        };
        let score = m.score();
        wtr.write_record([
            (i + 1).to_string(),
            format.to_string(),
            m.team_a.name.clone(),
            m.team_b.name.clone(),
            score.a.to_string(),
            score.b.to_string(),
            games,
            m.winner().map(|t| t.name.clone()).unwrap_or_default(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
