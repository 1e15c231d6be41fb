//! Match, MatchRecord (raw fixture form), events and sides.

use crate::models::player::PlayerId;
use crate::models::team::TeamId;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a match (e.g. "qf1", "royals-vs-blitz-2025-09-11").
pub type MatchId = String;

/// Display format for kickoff times (day/month/year, 24h clock).
pub const KICKOFF_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Which side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Kind of a match event. Anything the site does not know about is kept as `Other`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
    OwnGoal,
    Penalty,
    #[serde(other)]
    Other,
}

impl EventType {
    /// Goal-like events shown in the match report.
    pub fn is_scoring(self) -> bool {
        matches!(self, EventType::Goal | EventType::OwnGoal | EventType::Penalty)
    }
}

/// One event of a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    #[serde(rename = "type")]
    pub kind: EventType,
    /// Display only.
    #[serde(default)]
    pub minute: Option<u32>,
    pub player_id: PlayerId,
    /// Only meaningful for `EventType::Goal`.
    #[serde(default)]
    pub assist_id: Option<PlayerId>,
    /// Club the event counts toward (for own goals: the scorer's club).
    #[serde(default)]
    pub club_id: Option<TeamId>,
}

impl MatchEvent {
    pub fn new(kind: EventType, player_id: impl Into<PlayerId>, club_id: impl Into<TeamId>) -> Self {
        Self {
            kind,
            minute: None,
            player_id: player_id.into(),
            assist_id: None,
            club_id: Some(club_id.into()),
        }
    }

    pub fn with_assist(mut self, assist_id: impl Into<PlayerId>) -> Self {
        self.assist_id = Some(assist_id.into());
        self
    }

    pub fn at_minute(mut self, minute: u32) -> Self {
        self.minute = Some(minute);
        self
    }
}

/// A match with every alias resolved. `None` team means the slot is not filled yet
/// ("TBD"); `None` score means the match has not been played.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home: Option<TeamId>,
    pub away: Option<TeamId>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
    pub date: Option<String>,
    pub round: Option<String>,
    /// Man of the match.
    pub motm: Option<PlayerId>,
}

impl Match {
    /// A match with empty slots and no result.
    pub fn empty(id: impl Into<MatchId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn pairing(id: impl Into<MatchId>, home: Option<TeamId>, away: Option<TeamId>) -> Self {
        Self {
            home,
            away,
            ..Self::empty(id)
        }
    }

    /// Both scores, when the match has been played.
    pub fn score(&self) -> Option<(u32, u32)> {
        Some((self.home_score?, self.away_score?))
    }

    pub fn team(&self, side: Side) -> Option<&TeamId> {
        match side {
            Side::Home => self.home.as_ref(),
            Side::Away => self.away.as_ref(),
        }
    }

    pub fn team_mut(&mut self, side: Side) -> &mut Option<TeamId> {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Side played by the given club, if any.
    pub fn side_of(&self, club_id: &str) -> Option<Side> {
        if self.home.as_deref() == Some(club_id) {
            Some(Side::Home)
        } else if self.away.as_deref() == Some(club_id) {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Kickoff time. Dates with an offset are converted to UTC; plain dates are midnight.
    pub fn kickoff(&self) -> Option<NaiveDateTime> {
        let raw = self.date.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc).naive_utc());
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    /// Kickoff formatted for display; unparseable or missing dates give `None`.
    pub fn kickoff_text(&self) -> Option<String> {
        self.kickoff().map(|dt| dt.format(KICKOFF_FORMAT).to_string())
    }
}

/// Deserialize a field so that "absent" (`None`) and "explicit null" (`Some(None)`) differ.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// A match as written in the fixture file: any field may be missing, team
/// references and scores have legacy names.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    #[serde(default, deserialize_with = "present")]
    pub home: Option<Option<TeamId>>,
    #[serde(default, deserialize_with = "present")]
    pub away: Option<Option<TeamId>>,
    /// Legacy name for `home`.
    #[serde(default, deserialize_with = "present")]
    pub home_team: Option<Option<TeamId>>,
    /// Legacy name for `away`.
    #[serde(default, deserialize_with = "present")]
    pub away_team: Option<Option<TeamId>>,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    /// Legacy name for `home_score`.
    #[serde(default)]
    pub home_goals: Option<u32>,
    /// Legacy name for `away_score`.
    #[serde(default)]
    pub away_goals: Option<u32>,
    #[serde(default)]
    pub events: Option<Vec<MatchEvent>>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(default)]
    pub motm: Option<PlayerId>,
}

impl MatchRecord {
    pub fn new(id: impl Into<MatchId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_teams(mut self, home: Option<&str>, away: Option<&str>) -> Self {
        self.home = Some(home.map(str::to_string));
        self.away = Some(away.map(str::to_string));
        self
    }

    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.home_score = Some(home);
        self.away_score = Some(away);
        self
    }

    pub fn with_events(mut self, events: Vec<MatchEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn with_motm(mut self, player_id: impl Into<PlayerId>) -> Self {
        self.motm = Some(player_id.into());
        self
    }

    /// Home team slot, `None` when neither name is present; the primary name wins over the legacy one.
    pub fn resolved_home(&self) -> Option<Option<TeamId>> {
        self.home.clone().or_else(|| self.home_team.clone())
    }

    /// Away team slot, `None` when neither name is present; the primary name wins over the legacy one.
    pub fn resolved_away(&self) -> Option<Option<TeamId>> {
        self.away.clone().or_else(|| self.away_team.clone())
    }

    /// Home score; the primary name wins over the legacy one.
    pub fn resolved_home_score(&self) -> Option<u32> {
        self.home_score.or(self.home_goals)
    }

    /// Away score; the primary name wins over the legacy one.
    pub fn resolved_away_score(&self) -> Option<u32> {
        self.away_score.or(self.away_goals)
    }

    fn has_score(&self) -> bool {
        [self.home_score, self.away_score, self.home_goals, self.away_goals]
            .iter()
            .any(Option::is_some)
    }

    /// Shallow-merge this record over `base`: fields present here win, absent fields keep `base`.
    pub fn merge_onto(&self, base: Match) -> Match {
        let (home_score, away_score) = if self.has_score() {
            (self.resolved_home_score(), self.resolved_away_score())
        } else {
            (base.home_score, base.away_score)
        };
        Match {
            id: self.id.clone(),
            home: self.resolved_home().unwrap_or(base.home),
            away: self.resolved_away().unwrap_or(base.away),
            home_score,
            away_score,
            events: self.events.clone().unwrap_or(base.events),
            date: self.date.clone().or(base.date),
            round: self.round.clone().or(base.round),
            motm: self.motm.clone().or(base.motm),
        }
    }

    /// The record on its own, aliases resolved.
    pub fn to_match(&self) -> Match {
        self.merge_onto(Match::empty(self.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_teams_differ() {
        let absent: MatchRecord = serde_json::from_str(r#"{"id":"qf1"}"#).unwrap();
        let null: MatchRecord = serde_json::from_str(r#"{"id":"qf1","home":null}"#).unwrap();
        assert_eq!(absent.home, None);
        assert_eq!(null.home, Some(None));
    }

    #[test]
    fn legacy_team_names_are_accepted() {
        let r: MatchRecord =
            serde_json::from_str(r#"{"id":"m1","home_team":"c1","away_team":"c2"}"#).unwrap();
        let m = r.to_match();
        assert_eq!(m.home.as_deref(), Some("c1"));
        assert_eq!(m.away.as_deref(), Some("c2"));
    }

    #[test]
    fn both_team_names_present_primary_wins() {
        let r: MatchRecord = serde_json::from_str(
            r#"{"id":"m1","home":"t1","home_team":"c1","away":null,"away_team":"c2"}"#,
        )
        .unwrap();
        let m = r.to_match();
        assert_eq!(m.home.as_deref(), Some("t1"));
        assert_eq!(m.away, None);
    }

    #[test]
    fn primary_score_name_wins() {
        let r: MatchRecord = serde_json::from_str(
            r#"{"id":"m1","home_score":3,"home_goals":1,"away_goals":2}"#,
        )
        .unwrap();
        let m = r.to_match();
        assert_eq!(m.home_score, Some(3));
        assert_eq!(m.away_score, Some(2));
    }

    #[test]
    fn null_primary_score_falls_back_to_legacy() {
        let r: MatchRecord = serde_json::from_str(
            r#"{"id":"m1","home_score":null,"home_goals":2,"away_score":1,"away_goals":null}"#,
        )
        .unwrap();
        assert_eq!(r.resolved_home_score(), Some(2));
        assert_eq!(r.to_match().score(), Some((2, 1)));
    }

    #[test]
    fn unknown_event_types_are_kept_as_other() {
        let e: MatchEvent =
            serde_json::from_str(r#"{"type":"yellow_card","minute":12,"player_id":"p1"}"#).unwrap();
        assert_eq!(e.kind, EventType::Other);
        assert!(!e.kind.is_scoring());
    }

    #[test]
    fn kickoff_formats() {
        let mut m = Match::empty("m1");
        m.date = Some("2025-09-10T12:00:00Z".to_string());
        assert_eq!(m.kickoff_text().as_deref(), Some("10/09/2025, 12:00:00"));
        m.date = Some("2025-09-11".to_string());
        assert_eq!(m.kickoff_text().as_deref(), Some("11/09/2025, 00:00:00"));
        m.date = Some("soon".to_string());
        assert_eq!(m.kickoff_text(), None);
    }
}
