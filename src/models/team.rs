//! Team (club) data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a team, as written in the fixture file (e.g. "t1").
pub type TeamId = String;

/// A team or club: used both for the cup bracket and for league clubs.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Crest image reference (relative path or URL).
    #[serde(default)]
    pub crest: String,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>, crest: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            crest: crest.into(),
        }
    }
}

/// Look up a team by id. `None` id or unknown id both yield `None` ("TBD").
pub fn find_team<'a>(teams: &'a [Team], id: Option<&str>) -> Option<&'a Team> {
    let id = id?;
    teams.iter().find(|t| t.id == id)
}
