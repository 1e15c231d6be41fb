//! Data structures for the site: teams, players, matches, fixture documents.

mod fixture;
mod game;
mod player;
mod team;

pub use fixture::{FixtureDocument, FixtureError, BRACKET_TEAMS};
pub use game::{EventType, Match, MatchEvent, MatchId, MatchRecord, Side, KICKOFF_FORMAT};
pub use player::{Player, PlayerId, PlayerStats};
pub use team::{find_team, Team, TeamId};
