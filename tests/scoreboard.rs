//! Integration tests for the scoreboard session and results export.

use match_scoreboard_web::{
    export_results_csv, parse_teams, MatchFormat, PairingMode, Score, Scoreboard, ScoreboardError,
    SequentialIds, Side,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

fn scoreboard(input: &str, mode: PairingMode) -> Scoreboard {
    let mut ids = SequentialIds::new();
    let teams = parse_teams(input, &mut ids).unwrap();
    Scoreboard::new(teams, mode, &mut ids, &mut StdRng::seed_from_u64(5)).unwrap()
}

#[test]
fn from_input_rejects_a_single_team() {
    let err = Scoreboard::from_input("\n  Lonely  \n", PairingMode::Random).unwrap_err();
    assert_eq!(err, ScoreboardError::NotEnoughTeams { found: 1 });
    assert_eq!(err.to_string(), "Please enter at least 2 teams");
}

#[test]
fn from_input_pairs_teams() {
    let s = Scoreboard::from_input("A\nB\nC\nD", PairingMode::Sequential).unwrap();
    assert_eq!(s.teams.len(), 4);
    assert_eq!(s.matches.len(), 2);
    assert_eq!(s.mode, PairingMode::Sequential);
    assert!(!s.is_finished());
}

#[test]
fn score_point_updates_only_the_selected_match() {
    let mut s = scoreboard("A\nB\nC\nD", PairingMode::Sequential);
    let first = s.matches[0].id;
    let m = s.score_point(first, Side::B).unwrap();
    assert_eq!(m.score(), Score::new(0, 1));
    assert_eq!(s.find_match(first).unwrap().score(), Score::new(0, 1));
    assert_eq!(s.matches[1].score(), Score::default());
}

#[test]
fn score_point_unknown_match() {
    let mut s = scoreboard("A\nB", PairingMode::Random);
    let missing = Uuid::from_u128(999);
    assert_eq!(
        s.score_point(missing, Side::A).unwrap_err(),
        ScoreboardError::MatchNotFound(missing)
    );
}

#[test]
fn finishing_every_match_reports_winners() {
    let mut s = scoreboard("A\nB\nC\nD", PairingMode::Sequential);
    let ids: Vec<_> = s.matches.iter().map(|m| m.id).collect();
    for _ in 0..21 {
        s.score_point(ids[0], Side::A).unwrap();
        s.score_point(ids[1], Side::B).unwrap();
    }
    assert!(s.is_finished());
    let winners: Vec<_> = s.winners().into_iter().map(|t| t.name.as_str()).collect();
    assert_eq!(winners, ["A", "D"]);
}

#[test]
fn restart_resets_scores_and_keeps_teams() {
    let mut s = scoreboard("A\nB\nC\nD", PairingMode::BestOfThree);
    let old = s.matches[0].id;
    s.score_point(old, Side::A).unwrap();
    let mut ids = SequentialIds::new();
    for _ in 0..100 {
        let _ = match_scoreboard_web::IdProvider::next_id(&mut ids);
    }
    s.restart(&mut ids, &mut StdRng::seed_from_u64(9));
    assert_eq!(s.matches.len(), 2);
    assert!(s.find_match(old).is_none());
    assert!(s.matches.iter().all(|m| m.score() == Score::default()));
    assert!(s.matches.iter().all(|m| matches!(m.format, MatchFormat::BestOfThree(_))));
    assert_eq!(s.teams.len(), 4);
}

#[test]
fn csv_export_has_a_row_per_match() {
    let mut s = scoreboard("Eagles\nHawks\nOwls\nCrows", PairingMode::BestOfThree);
    let id = s.matches[0].id;
    for _ in 0..21 {
        s.score_point(id, Side::A).unwrap();
    }
    for _ in 0..15 {
        s.score_point(id, Side::B).unwrap();
    }
    for _ in 0..21 {
        s.score_point(id, Side::A).unwrap();
    }

    let csv = export_results_csv(&s).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "match,format,team_a,team_b,score_a,score_b,games,winner");
    assert_eq!(lines[1], "1,best_of_three,Eagles,Hawks,2,0,21-0 21-15,Eagles");
    assert_eq!(lines[2], "2,best_of_three,Owls,Crows,0,0,,");
}

#[test]
fn legacy_mode_flag() {
    assert_eq!(PairingMode::from_best_of_three(true), PairingMode::BestOfThree);
    assert_eq!(PairingMode::from_best_of_three(false), PairingMode::Random);
    let mode: PairingMode = serde_json::from_str("\"bestOfThree\"").unwrap();
    assert_eq!(mode, PairingMode::BestOfThree);
    let mode: PairingMode = serde_json::from_str("\"sequential\"").unwrap();
    assert_eq!(mode, PairingMode::Sequential);
}
