//! Player and PlayerStats data structures.

use crate::models::team::TeamId;
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a player.
pub type PlayerId = String;

/// Derived counters for one player (for API / display).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    /// Man-of-the-match awards.
    pub motm: u32,
}

impl PlayerStats {
    /// All-zero counters for the given player.
    pub fn empty(player_id: impl Into<PlayerId>) -> Self {
        Self {
            player_id: player_id.into(),
            ..Self::default()
        }
    }

    pub fn from_player(p: &Player) -> Self {
        Self {
            player_id: p.id.clone(),
            appearances: p.appearances,
            goals: p.goals,
            assists: p.assists,
            motm: p.motm,
        }
    }
}

/// Grade as text: strings as given, numbers formatted, anything else (null, bool, ...) is `None`.
fn grade<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// A league player. The four counters are never read from the fixture file:
/// they start at zero and are recomputed on every load.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub club_id: TeamId,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub preferred_foot: Option<String>,
    /// School grade, shown as "Grade" on the profile. Numbers and text ("5A") are both kept as text.
    #[serde(default, deserialize_with = "grade")]
    pub age: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(skip_deserializing)]
    pub appearances: u32,
    #[serde(skip_deserializing)]
    pub goals: u32,
    #[serde(skip_deserializing)]
    pub assists: u32,
    #[serde(skip_deserializing)]
    pub motm: u32,
}

impl Player {
    /// Create a player with the given id, name and club. Other fields start empty/zero.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, club_id: impl Into<TeamId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            club_id: club_id.into(),
            ..Self::default()
        }
    }

    /// Current counters as a separate struct (for API responses).
    pub fn stats(&self) -> PlayerStats {
        PlayerStats::from_player(self)
    }

    /// Overwrite the four counters.
    pub fn set_stats(&mut self, stats: &PlayerStats) {
        self.appearances = stats.appearances;
        self.goals = stats.goals;
        self.assists = stats.assists;
        self.motm = stats.motm;
    }

    pub fn reset_stats(&mut self) {
        self.set_stats(&PlayerStats::default());
    }
}
