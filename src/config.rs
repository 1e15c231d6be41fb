//! Server configuration from environment variables.
//!
//! HOST (default 0.0.0.0), PORT (8080), CUP_FIXTURE (assets/db.json),
//! LEAGUE_FIXTURE (assets/dbjr.json), STATIC_DIR (assets).

use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Fixture behind the cup bracket page.
    pub cup_fixture: PathBuf,
    /// Fixture behind the player and match pages.
    pub league_fixture: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cup_fixture: PathBuf::from("assets/db.json"),
            league_fixture: PathBuf::from("assets/dbjr.json"),
            static_dir: PathBuf::from("assets"),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing or unparseable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cup_fixture: lookup("CUP_FIXTURE")
                .map(PathBuf::from)
                .unwrap_or(defaults.cup_fixture),
            league_fixture: lookup("LEAGUE_FIXTURE")
                .map(PathBuf::from)
                .unwrap_or(defaults.league_fixture),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }
}
