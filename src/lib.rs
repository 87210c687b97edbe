//! Tilewalk - tile-based movement for a single scrolling entity
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, tiles, movement, camera, frame loop)
//! - `config`: Immutable engine configuration (screen, level, tile and dot sizing)
//! - `error`: Level and configuration errors

pub mod config;
pub mod error;
pub mod sim;

pub use config::{EngineConfig, MovementBounds};
pub use error::{Error, Result};

/// Default engine constants
pub mod consts {
    /// Viewport dimensions
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Level dimensions
    pub const LEVEL_WIDTH: i32 = 1280;
    pub const LEVEL_HEIGHT: i32 = 960;

    /// Tile cell size
    pub const TILE_WIDTH: i32 = 80;
    pub const TILE_HEIGHT: i32 = 80;
    /// (1280 / 80) * (960 / 80)
    pub const TOTAL_TILES: usize = 192;

    /// Dot defaults
    pub const DOT_WIDTH: i32 = 20;
    pub const DOT_HEIGHT: i32 = 20;
    /// Pixels moved per frame per held direction
    pub const DOT_VEL: i32 = 10;
}
