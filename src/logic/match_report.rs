//! League match detail page: header and goal events split into home and away columns.

use crate::models::{find_team, EventType, FixtureDocument, Match, MatchEvent, Player, Side, Team};
use serde::Serialize;

/// Scorer name when the player id is unknown.
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// A player as linked from the report.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerLink {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl PlayerLink {
    fn from_player(p: &Player) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            slug: crate::logic::profile::slugify(&p.name),
        }
    }
}

/// One goal line in a column.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GoalLine {
    pub minute: Option<u32>,
    pub kind: EventType,
    /// Scorer's name, or "Unknown".
    pub scorer_name: String,
    pub scorer: Option<PlayerLink>,
    /// Only for plain goals.
    pub assist: Option<PlayerLink>,
    /// The scorer's club.
    pub club: Option<Team>,
    pub position: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchReport {
    pub id: String,
    pub home: Option<Team>,
    pub away: Option<Team>,
    /// "2 - 1", or "?" while the match is not complete.
    pub score: String,
    pub kickoff: Option<String>,
    pub home_events: Vec<GoalLine>,
    pub away_events: Vec<GoalLine>,
}

/// Column a goal event is listed under. Own goals go opposite the scorer's club;
/// other goals go under their club and are dropped when it played neither side.
pub fn event_side(m: &Match, ev: &MatchEvent) -> Option<Side> {
    let club_side = ev.club_id.as_deref().and_then(|c| m.side_of(c));
    match ev.kind {
        EventType::OwnGoal => Some(club_side.map_or(Side::Home, Side::opposite)),
        EventType::Goal | EventType::Penalty => club_side,
        EventType::Other => None,
    }
}

fn goal_line(doc: &FixtureDocument, ev: &MatchEvent) -> GoalLine {
    let find_player = |id: &str| doc.players.iter().find(|p| p.id == id);
    let scorer = find_player(&ev.player_id);
    let assist = match ev.kind {
        EventType::Goal => ev.assist_id.as_deref().and_then(find_player),
        _ => None,
    };
    GoalLine {
        minute: ev.minute,
        kind: ev.kind,
        scorer_name: scorer.map_or(UNKNOWN_PLAYER, |p| p.name.as_str()).to_string(),
        scorer: scorer.map(PlayerLink::from_player),
        assist: assist.map(PlayerLink::from_player),
        club: scorer
            .and_then(|p| find_team(&doc.clubs, Some(p.club_id.as_str())))
            .cloned(),
        position: scorer.map(|p| p.position.clone()),
        nationality: scorer.and_then(|p| p.nationality.clone()),
    }
}

/// Build the report for match `id`; `None` when the document has no such match.
pub fn match_report(doc: &FixtureDocument, id: &str) -> Option<MatchReport> {
    let m = doc.matches.iter().find(|r| r.id == id)?.to_match();

    let mut report = MatchReport {
        id: m.id.clone(),
        home: find_team(&doc.clubs, m.home.as_deref()).cloned(),
        away: find_team(&doc.clubs, m.away.as_deref()).cloned(),
        score: match m.score() {
            Some((h, a)) => format!("{h} - {a}"),
            None => "?".to_string(),
        },
        kickoff: m.kickoff_text(),
        home_events: Vec::new(),
        away_events: Vec::new(),
    };

    for ev in m.events.iter().filter(|ev| ev.kind.is_scoring()) {
        match event_side(&m, ev) {
            Some(Side::Home) => report.home_events.push(goal_line(doc, ev)),
            Some(Side::Away) => report.away_events.push(goal_line(doc, ev)),
            None => {}
        }
    }

    Some(report)
}
