//! Cup page view models: outer slots, bracket cards and the fixture list.

use crate::logic::bracket::{ResolvedBracket, BRACKET_MATCH_IDS};
use crate::models::{find_team, FixtureDocument, Match, MatchId, Team, BRACKET_TEAMS};
use serde::Serialize;

/// Shown for an empty slot or unknown team.
pub const TBD: &str = "TBD";
/// Shown instead of a score for matches not yet played.
pub const UPCOMING: &str = "Upcoming";

/// One card of the bracket (quarterfinal, semifinal or final).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BracketCard {
    pub id: MatchId,
    /// `None` renders as "TBD".
    pub home: Option<Team>,
    pub away: Option<Team>,
    pub score: Option<(u32, u32)>,
    pub kickoff: Option<String>,
}

/// One row of the fixture list under the bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FixtureRow {
    pub id: MatchId,
    pub home_name: String,
    pub home_crest: Option<String>,
    pub away_name: String,
    pub away_crest: Option<String>,
    pub round: Option<String>,
    pub kickoff: Option<String>,
    /// "2 - 1", or "Upcoming".
    pub result: String,
}

/// The eight outer positions of the bracket; `None` where the team list is short.
pub fn outer_slots(teams: &[Team]) -> Vec<Option<Team>> {
    (0..BRACKET_TEAMS).map(|i| teams.get(i).cloned()).collect()
}

/// Cards for the seven fixed matches, using the display fallback for empty slots.
pub fn bracket_cards(teams: &[Team], bracket: &ResolvedBracket) -> Vec<BracketCard> {
    BRACKET_MATCH_IDS
        .iter()
        .map(|id| {
            let (home, away) = bracket.display_pairing(id);
            let m = bracket.get(id);
            BracketCard {
                id: id.to_string(),
                home: find_team(teams, home.map(String::as_str)).cloned(),
                away: find_team(teams, away.map(String::as_str)).cloned(),
                score: m.and_then(Match::score),
                kickoff: m.and_then(Match::kickoff_text),
            }
        })
        .collect()
}

/// A match with nothing to show: no teams, no date, no score.
fn is_blank(m: &Match) -> bool {
    m.home.is_none()
        && m.away.is_none()
        && m.date.is_none()
        && m.home_score.is_none()
        && m.away_score.is_none()
}

fn team_label(teams: &[Team], id: Option<&str>) -> (String, Option<String>) {
    match find_team(teams, id) {
        Some(t) => (t.name.clone(), Some(t.crest.clone())),
        None => (id.unwrap_or(TBD).to_string(), None),
    }
}

/// Fixture list: the document's matches in document order when it lists any,
/// otherwise the resolved bracket matches. Blank matches are skipped.
pub fn fixture_list(doc: &FixtureDocument, bracket: &ResolvedBracket) -> Vec<FixtureRow> {
    let listed: Vec<Match> = if doc.matches.is_empty() {
        bracket.fixed_matches().cloned().collect()
    } else {
        doc.resolved_matches()
    };

    listed
        .iter()
        .filter(|m| !is_blank(m))
        .map(|m| {
            let (home_name, home_crest) = team_label(&doc.teams, m.home.as_deref());
            let (away_name, away_crest) = team_label(&doc.teams, m.away.as_deref());
            let result = match m.score() {
                Some((h, a)) => format!("{h} - {a}"),
                None => UPCOMING.to_string(),
            };
            FixtureRow {
                id: m.id.clone(),
                home_name,
                home_crest,
                away_name,
                away_crest,
                round: m.round.clone(),
                kickoff: m.kickoff_text(),
                result,
            }
        })
        .collect()
}

/// Everything the cup page needs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CupPage {
    pub slots: Vec<Option<Team>>,
    pub cards: Vec<BracketCard>,
    pub bracket: ResolvedBracket,
    pub fixtures: Vec<FixtureRow>,
}

/// Resolve the bracket and build the cup page from a fixture document.
pub fn cup_page(doc: &FixtureDocument) -> CupPage {
    let bracket = crate::logic::bracket::resolve_bracket(&doc.teams, &doc.matches);
    CupPage {
        slots: outer_slots(&doc.teams),
        cards: bracket_cards(&doc.teams, &bracket),
        fixtures: fixture_list(doc, &bracket),
        bracket,
    }
}
