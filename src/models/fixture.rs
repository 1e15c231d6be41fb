//! FixtureDocument: the JSON file behind every page, and FixtureError.

use crate::models::game::{Match, MatchRecord};
use crate::models::player::Player;
use crate::models::team::Team;
use serde::Deserialize;
use std::path::PathBuf;

/// Number of teams in the cup bracket.
pub const BRACKET_TEAMS: usize = 8;

/// Errors that can occur while loading a fixture document.
#[derive(Debug)]
pub enum FixtureError {
    /// The file could not be read.
    Read { path: PathBuf, source: std::io::Error },
    /// The file is not a valid fixture document.
    Parse { path: PathBuf, source: serde_json::Error },
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureError::Read { path, source } => {
                write!(f, "Could not read fixture {}: {}", path.display(), source)
            }
            FixtureError::Parse { path, source } => {
                write!(f, "Invalid fixture {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Read { source, .. } => Some(source),
            FixtureError::Parse { source, .. } => Some(source),
        }
    }
}

/// A fixture document. The cup file uses `teams` + `matches`; league files use
/// `clubs` + `players` + `matches` (with events). Missing arrays are empty.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct FixtureDocument {
    /// Cup teams, in bracket order (positions 0..7).
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub clubs: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

impl FixtureDocument {
    /// Built-in cup document: eight placeholder teams, no matches.
    pub fn fallback() -> Self {
        let teams = (1..=BRACKET_TEAMS)
            .map(|n| Team::new(format!("t{n}"), format!("Club {n}"), format!("club{n}.png")))
            .collect();
        Self {
            teams,
            ..Self::default()
        }
    }

    /// All matches with aliases resolved, in document order.
    pub fn resolved_matches(&self) -> Vec<Match> {
        self.matches.iter().map(MatchRecord::to_match).collect()
    }
}
