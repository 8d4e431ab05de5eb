//! JSON export for the rendering layer.
//!
//! The web page consumes each collection as a JSON array of records.
//! Serialization preserves the authored field names and nesting; absent
//! optional fields are omitted entirely rather than written as null.

use crate::character::Character;
use crate::roster::{self, Game};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Errors from export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render one collection as pretty-printed JSON.
pub fn roster_json(game: Game) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(roster::characters(game))?)
}

/// Render a single record as pretty-printed JSON.
pub fn character_json(character: &Character) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(character)?)
}

/// Write one collection to disk as JSON.
pub async fn write_roster(game: Game, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let json = roster_json(game)?;
    fs::write(path, json).await?;
    Ok(())
}

/// Read back a collection previously written by [`write_roster`].
pub async fn read_roster(path: impl AsRef<Path>) -> Result<Vec<Character>, ExportError> {
    let bytes = fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
