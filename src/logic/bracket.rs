//! Cup bracket: 8 teams → 4 quarterfinals → 2 semifinals → final (single elimination).
//!
//! Winners are inferred from scores and pushed forward into empty slots only;
//! explicit fixture data always takes precedence over propagation.

use crate::models::{Match, MatchId, MatchRecord, Side, Team, TeamId, BRACKET_TEAMS};
use std::collections::{BTreeMap, HashMap};

pub const QF1: &str = "qf1";
pub const QF2: &str = "qf2";
pub const QF3: &str = "qf3";
pub const QF4: &str = "qf4";
pub const SF1: &str = "sf1";
pub const SF2: &str = "sf2";
pub const FINAL: &str = "final";

const QUARTER_FINALS: [&str; 4] = [QF1, QF2, QF3, QF4];
const LATER_ROUNDS: [&str; 3] = [SF1, SF2, FINAL];

/// The seven fixed matches, in bracket order.
pub const BRACKET_MATCH_IDS: [&str; 7] = [QF1, QF2, QF3, QF4, SF1, SF2, FINAL];

/// Fixed wiring: (source match, target match, target side), applied in this order.
const PROPAGATION: [(&str, &str, Side); 6] = [
    (QF1, SF1, Side::Home),
    (QF2, SF1, Side::Away),
    (QF3, SF2, Side::Home),
    (QF4, SF2, Side::Away),
    (SF1, FINAL, Side::Home),
    (SF2, FINAL, Side::Away),
];

/// Winner of a match: the higher-scoring side, only when both scores are set and differ.
/// Draws and unplayed matches have no winner.
pub fn winner_of(m: &Match) -> Option<&TeamId> {
    let (home, away) = m.score()?;
    match home.cmp(&away) {
        std::cmp::Ordering::Greater => m.home.as_ref(),
        std::cmp::Ordering::Less => m.away.as_ref(),
        std::cmp::Ordering::Equal => None,
    }
}

/// Fully resolved bracket: the seven fixed matches plus any other match ids
/// the fixture listed (passed through untouched).
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct ResolvedBracket {
    pub matches: BTreeMap<MatchId, Match>,
}

impl ResolvedBracket {
    pub fn get(&self, id: &str) -> Option<&Match> {
        self.matches.get(id)
    }

    /// The seven fixed matches in bracket order (qf1..qf4, sf1, sf2, final).
    pub fn fixed_matches(&self) -> impl Iterator<Item = &Match> + '_ {
        BRACKET_MATCH_IDS.iter().filter_map(move |id| self.get(id))
    }

    fn team_of(&self, id: &str, side: Side) -> Option<&TeamId> {
        self.get(id).and_then(|m| m.team(side))
    }

    fn winner(&self, id: &str) -> Option<&TeamId> {
        self.get(id).and_then(winner_of)
    }

    /// Teams to show on a bracket card. An empty semifinal slot shows the home team of
    /// the quarterfinal feeding it; an empty final slot shows the semifinal winner.
    /// The resolved match itself is left as is.
    pub fn display_pairing(&self, id: &str) -> (Option<&TeamId>, Option<&TeamId>) {
        let home = self.team_of(id, Side::Home);
        let away = self.team_of(id, Side::Away);
        match id {
            SF1 => (
                home.or_else(|| self.team_of(QF1, Side::Home)),
                away.or_else(|| self.team_of(QF2, Side::Home)),
            ),
            SF2 => (
                home.or_else(|| self.team_of(QF3, Side::Home)),
                away.or_else(|| self.team_of(QF4, Side::Home)),
            ),
            FINAL => (
                home.or_else(|| self.winner(SF1)),
                away.or_else(|| self.winner(SF2)),
            ),
            _ => (home, away),
        }
    }

    /// Push the winner of `from` into `to`'s `side` slot if that slot is empty.
    fn push_winner(&mut self, from: &str, to: &str, side: Side) {
        let Some(winner) = self.winner(from).cloned() else {
            return;
        };
        let Some(target) = self.matches.get_mut(to) else {
            return;
        };
        let slot = target.team_mut(side);
        if slot.is_none() {
            log::debug!("bracket: {} winner {} advances to {} ({:?})", from, winner, to, side);
            *slot = Some(winner);
        }
    }
}

/// Resolve the cup bracket from the ordered team list and the fixture's match records.
///
/// 1. Quarterfinal k defaults to teams[2k-2] vs teams[2k-1]; an explicit record is merged over it.
/// 2. Semifinals and final start from their explicit record, or empty.
/// 3. Winners propagate qf → sf → final into empty slots.
/// 4. Explicit sf1/sf2/final records replace whatever propagation produced for them.
///
/// When a match id is listed twice the later record wins.
pub fn resolve_bracket(teams: &[Team], records: &[MatchRecord]) -> ResolvedBracket {
    let explicit: HashMap<&str, &MatchRecord> =
        records.iter().map(|r| (r.id.as_str(), r)).collect();
    let team_at = |pos: usize| -> Option<TeamId> {
        teams
            .iter()
            .take(BRACKET_TEAMS)
            .nth(pos)
            .map(|t| t.id.clone())
    };
    let with_explicit = |default: Match| -> Match {
        match explicit.get(default.id.as_str()) {
            Some(r) => r.merge_onto(default),
            None => default,
        }
    };

    let mut bracket = ResolvedBracket::default();
    for (k, id) in QUARTER_FINALS.iter().enumerate() {
        let default = Match::pairing(*id, team_at(2 * k), team_at(2 * k + 1));
        bracket.matches.insert(id.to_string(), with_explicit(default));
    }
    for id in LATER_ROUNDS {
        bracket
            .matches
            .insert(id.to_string(), with_explicit(Match::empty(id)));
    }

    for (from, to, side) in PROPAGATION {
        bracket.push_winner(from, to, side);
    }

    for id in LATER_ROUNDS {
        if let Some(r) = explicit.get(id) {
            bracket.matches.insert(id.to_string(), r.to_match());
        }
    }

    for r in records {
        if !BRACKET_MATCH_IDS.contains(&r.id.as_str()) {
            bracket.matches.insert(r.id.clone(), r.to_match());
        }
    }

    bracket
}
