//! Fixture store: reads a fixture document from disk, once per page load.

use crate::models::{FixtureDocument, FixtureError};
use std::path::Path;

/// Read and parse the fixture document at `path`.
pub async fn load_document(path: &Path) -> Result<FixtureDocument, FixtureError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: FixtureDocument =
        serde_json::from_slice(&bytes).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!(
        "Loaded {}: {} teams, {} clubs, {} players, {} matches",
        path.display(),
        doc.teams.len(),
        doc.clubs.len(),
        doc.players.len(),
        doc.matches.len()
    );
    Ok(doc)
}

/// Cup document: a failed load is replaced by the built-in eight-team fallback.
pub async fn load_cup_document(path: &Path) -> FixtureDocument {
    match load_document(path).await {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("{}; using fallback cup fixture", e);
            FixtureDocument::fallback()
        }
    }
}
