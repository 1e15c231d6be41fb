//! Integration tests for loading fixture documents from disk.

use cup_site_web::{
    league_players, load_cup_document, load_document, player_profile, FixtureDocument, FixtureError,
};
use std::path::PathBuf;

fn temp_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cup_site_web_{}_{}.json", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn loads_cup_document() {
    let path = temp_fixture(
        "cup",
        r#"{"teams":[{"id":"t1","name":"Royals","crest":"r.png"}],"matches":[{"id":"qf1","home_goals":1,"away_goals":0}]}"#,
    );
    let doc = load_document(&path).await.unwrap();
    assert_eq!(doc.teams.len(), 1);
    assert_eq!(doc.matches[0].resolved_home_score(), Some(1));
    assert!(doc.players.is_empty());
    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn missing_file_is_read_error() {
    let path = std::env::temp_dir().join("cup_site_web_does_not_exist.json");
    let err = load_document(&path).await.unwrap_err();
    assert!(matches!(err, FixtureError::Read { .. }));
    assert!(err.to_string().contains("does_not_exist"));
}

#[tokio::test]
async fn invalid_json_is_parse_error() {
    let path = temp_fixture("broken", "{ not json");
    let err = load_document(&path).await.unwrap_err();
    assert!(matches!(err, FixtureError::Parse { .. }));
    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn cup_falls_back_on_failure() {
    let path = std::env::temp_dir().join("cup_site_web_missing_cup.json");
    let doc = load_cup_document(&path).await;
    assert_eq!(doc, FixtureDocument::fallback());
    assert_eq!(doc.teams.len(), 8);
    assert_eq!(doc.teams[7].id, "t8");
    assert!(doc.matches.is_empty());
}

#[tokio::test]
async fn null_counters_and_text_grades_do_not_reject_league() {
    let path = temp_fixture(
        "league_nulls",
        r#"{
            "clubs": [{"id":"c1","name":"Royals","crest":"r.png"}],
            "players": [
                {"id":"p1","name":"Ali Valiev","club_id":"c1","goals":null,"appearances":null,"age":"5A"},
                {"id":"p2","name":"Bek Karimov","club_id":"c1","assists":null,"motm":null,"age":7}
            ],
            "matches": [
                {"id":"m1","home_team":"c1","away_team":"c2","home_goals":1,"away_goals":0,
                 "events":[{"type":"goal","minute":5,"player_id":"p1","assist_id":"p2","club_id":"c1"}]}
            ]
        }"#,
    );
    let doc = load_document(&path).await.unwrap();
    std::fs::remove_file(&path).ok();

    let players = league_players(&doc);
    assert_eq!((players[0].appearances, players[0].goals), (1, 1));
    assert_eq!((players[1].assists, players[1].motm), (1, 0));

    let profile = player_profile(&doc, "ali-valiev").unwrap();
    assert_eq!(profile.player.age.as_deref(), Some("5A"));
    assert_eq!(profile.player.goals, 1);
}
