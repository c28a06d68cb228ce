//! Setup: turn the team-name text box into teams.

use crate::models::{IdProvider, ScoreboardError, Team};

/// One team per line. Names are trimmed and blank lines skipped; order is kept.
/// Fewer than 2 names is rejected and nothing is created.
pub fn parse_teams<I: IdProvider>(input: &str, ids: &mut I) -> Result<Vec<Team>, ScoreboardError> {
    let names: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    if names.len() < 2 {
        return Err(ScoreboardError::NotEnoughTeams { found: names.len() });
    }
    Ok(names
        .into_iter()
        .map(|name| Team::new(ids.next_id(), name))
        .collect())
}
