//! Engine errors
//!
//! Movement and collision never fail; everything here comes from building a
//! level or a configuration that the simulation cannot run on.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
    #[error("tile {index}: expected a tile kind id, found {token:?}")]
    BadTileToken { index: usize, token: String },
    #[error("tile {index}: unknown tile kind id {id}")]
    UnknownTileKind { index: usize, id: i64 },
    #[error("level map has {found} tiles, expected {expected}")]
    TileCount { expected: usize, found: usize },
    /// The dot cannot be placed at its spawn point without overlapping a
    /// solid tile or leaving the movement bounds.
    #[error("invalid level state: spawn at ({x}, {y}) is blocked")]
    InvalidLevelState { x: i32, y: i32 },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
