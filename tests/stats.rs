//! Integration tests for player stats aggregation.

use cup_site_web::{
    aggregate_stats, is_completed, refresh_player_stats, write_stats_csv, EventType, Match,
    MatchEvent, MatchRecord, Player, PlayerStats,
};

fn roster() -> Vec<Player> {
    vec![
        Player::new("p1", "Ali Valiev", "home"),
        Player::new("p2", "Bek Karimov", "home"),
        Player::new("p3", "Sardor Aliev", "away"),
        Player::new("p4", "Timur Rashidov", "away"),
        Player::new("p5", "Jasur Nazarov", "bench"),
    ]
}

fn played(id: &str, hs: u32, a: u32, events: Vec<MatchEvent>) -> Match {
    MatchRecord::new(id)
        .with_teams(Some("home"), Some("away"))
        .with_score(hs, a)
        .with_events(events)
        .to_match()
}

fn stats_of<'a>(stats: &'a [PlayerStats], id: &str) -> &'a PlayerStats {
    stats.iter().find(|s| s.player_id == id).unwrap()
}

#[test]
fn completed_needs_both_scores() {
    let mut m = played("m1", 1, 0, vec![]);
    assert!(is_completed(&m));
    m.home_score = None;
    assert!(!is_completed(&m));
}

#[test]
fn goal_assist_and_own_goal() {
    let events = vec![
        MatchEvent::new(EventType::Goal, "p1", "home").with_assist("p2").at_minute(12),
        MatchEvent::new(EventType::OwnGoal, "p3", "away").at_minute(40),
    ];
    let stats = aggregate_stats(&roster(), &[played("m1", 2, 1, events)]);

    assert_eq!(stats_of(&stats, "p1").goals, 1);
    assert_eq!(stats_of(&stats, "p2").assists, 1);
    assert_eq!(stats_of(&stats, "p3").goals, 0);
    assert_eq!(stats_of(&stats, "p3").assists, 0);
    for id in ["p1", "p2", "p3", "p4"] {
        assert_eq!(stats_of(&stats, id).appearances, 1, "{id}");
    }
    assert_eq!(stats_of(&stats, "p5"), &PlayerStats::empty("p5"));
}

#[test]
fn penalty_counts_as_goal_but_never_assist() {
    let events = vec![MatchEvent::new(EventType::Penalty, "p3", "away").with_assist("p4")];
    let stats = aggregate_stats(&roster(), &[played("m1", 0, 1, events)]);
    assert_eq!(stats_of(&stats, "p3").goals, 1);
    assert_eq!(stats_of(&stats, "p4").assists, 0);
}

#[test]
fn incomplete_matches_count_for_nothing() {
    let mut m = played(
        "m1",
        1,
        0,
        vec![MatchEvent::new(EventType::Goal, "p1", "home").with_assist("p2")],
    );
    m.away_score = None;
    m.motm = Some("p1".to_string());
    let stats = aggregate_stats(&roster(), &[m]);
    assert!(stats.iter().all(|s| *s == PlayerStats::empty(s.player_id.clone())));
}

#[test]
fn motm_only_for_known_players() {
    let a = MatchRecord::new("m1")
        .with_teams(Some("home"), Some("away"))
        .with_score(1, 0)
        .with_motm("p4")
        .to_match();
    let mut b = played("m2", 2, 2, vec![]);
    b.motm = Some("ghost".to_string());
    let stats = aggregate_stats(&roster(), &[a, b]);
    assert_eq!(stats_of(&stats, "p4").motm, 1);
    assert_eq!(stats.iter().map(|s| s.motm).sum::<u32>(), 1);
    assert_eq!(stats_of(&stats, "p1").appearances, 2);
}

#[test]
fn unknown_scorers_and_other_events_are_ignored() {
    let events = vec![
        MatchEvent::new(EventType::Goal, "ghost", "home").with_assist("p2"),
        MatchEvent::new(EventType::Other, "p1", "home"),
    ];
    let stats = aggregate_stats(&roster(), &[played("m1", 1, 0, events)]);
    assert_eq!(stats_of(&stats, "p1").goals, 0);
    assert_eq!(stats_of(&stats, "p2").assists, 1);
}

#[test]
fn refresh_overwrites_stale_counters_and_is_idempotent() {
    let mut players = roster();
    players[0].goals = 99;
    players[4].appearances = 7;
    let matches = vec![played(
        "m1",
        1,
        0,
        vec![MatchEvent::new(EventType::Goal, "p1", "home")],
    )];

    refresh_player_stats(&mut players, &matches);
    let first = players.clone();
    refresh_player_stats(&mut players, &matches);

    assert_eq!(players, first);
    assert_eq!(players[0].goals, 1);
    assert_eq!(players[0].stats(), aggregate_stats(&roster(), &matches)[0]);
    assert_eq!(players[4].appearances, 0);
}

#[test]
fn order_of_matches_does_not_matter() {
    let a = played("m1", 1, 0, vec![MatchEvent::new(EventType::Goal, "p1", "home")]);
    let b = played("m2", 0, 2, vec![MatchEvent::new(EventType::Penalty, "p3", "away")]);
    let forward = aggregate_stats(&roster(), &[a.clone(), b.clone()]);
    let backward = aggregate_stats(&roster(), &[b, a]);
    assert_eq!(forward, backward);
}

#[test]
fn csv_has_header_and_one_row_per_player() {
    let mut players = roster();
    refresh_player_stats(
        &mut players,
        &[played("m1", 1, 0, vec![MatchEvent::new(EventType::Goal, "p1", "home")])],
    );
    let mut out = Vec::new();
    write_stats_csv(&players, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "id,name,club_id,position,appearances,goals,assists,motm");
    assert_eq!(lines[1], "p1,Ali Valiev,home,,1,1,0,0");
}
