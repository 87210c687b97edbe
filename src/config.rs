//! Engine configuration
//!
//! Screen, level, tile and dot sizing passed into the simulation at
//! construction time. Loaded from JSON; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::Rect;

/// Area the dot is confined to while moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MovementBounds {
    /// The dot stays inside a screen-sized area anchored at the level origin
    #[default]
    Screen,
    /// The dot may roam the whole level
    Level,
}

impl MovementBounds {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementBounds::Screen => "Screen",
            MovementBounds::Level => "Level",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "screen" => Some(MovementBounds::Screen),
            "level" => Some(MovementBounds::Level),
            _ => None,
        }
    }
}

/// Immutable sizing for one level and its viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Viewport ===
    pub screen_width: i32,
    pub screen_height: i32,

    // === Level ===
    pub level_width: i32,
    pub level_height: i32,
    pub tile_width: i32,
    pub tile_height: i32,
    /// Number of tiles a level map must contain
    pub total_tiles: usize,

    // === Dot ===
    pub dot_width: i32,
    pub dot_height: i32,
    /// Velocity contributed by each held direction
    pub dot_vel: i32,
    pub bounds: MovementBounds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            level_width: LEVEL_WIDTH,
            level_height: LEVEL_HEIGHT,
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            total_tiles: TOTAL_TILES,

            dot_width: DOT_WIDTH,
            dot_height: DOT_HEIGHT,
            dot_vel: DOT_VEL,
            bounds: MovementBounds::Screen,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Tile columns in the level
    pub fn columns(&self) -> i32 {
        self.level_width / self.tile_width
    }

    /// Tile rows in the level
    pub fn rows(&self) -> i32 {
        self.level_height / self.tile_height
    }

    /// Rectangle the dot's box must stay inside
    pub fn movement_area(&self) -> Rect {
        match self.bounds {
            MovementBounds::Screen => Rect::new(0, 0, self.screen_width, self.screen_height),
            MovementBounds::Level => Rect::new(0, 0, self.level_width, self.level_height),
        }
    }

    /// Check the sizing is consistent enough to run a level on
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("level_width", self.level_width),
            ("level_height", self.level_height),
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("dot_width", self.dot_width),
            ("dot_height", self.dot_height),
        ];
        for (name, value) in sizes {
            if value <= 0 {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.level_width > MAX_EXTENT || self.level_height > MAX_EXTENT {
            return Err(invalid(format!(
                "level {}x{} exceeds the {MAX_EXTENT} pixel limit",
                self.level_width, self.level_height
            )));
        }
        if self.dot_vel < 0 {
            return Err(invalid(format!("dot_vel must not be negative, got {}", self.dot_vel)));
        }
        if self.screen_width > self.level_width || self.screen_height > self.level_height {
            return Err(invalid(format!(
                "screen {}x{} does not fit level {}x{}",
                self.screen_width, self.screen_height, self.level_width, self.level_height
            )));
        }
        if self.level_width % self.tile_width != 0 || self.level_height % self.tile_height != 0 {
            return Err(invalid(format!(
                "level {}x{} is not a whole number of {}x{} tiles",
                self.level_width, self.level_height, self.tile_width, self.tile_height
            )));
        }
        let cells = self
            .columns()
            .checked_mul(self.rows())
            .and_then(|cells| usize::try_from(cells).ok())
            .ok_or_else(|| {
                invalid(format!(
                    "level has too many {}x{} cells to index",
                    self.tile_width, self.tile_height
                ))
            })?;
        if self.total_tiles != cells {
            return Err(invalid(format!(
                "total_tiles is {} but the level has {} cells",
                self.total_tiles, cells
            )));
        }
        let area = self.movement_area();
        if self.dot_width > area.width || self.dot_height > area.height {
            return Err(invalid(format!(
                "dot {}x{} does not fit movement area {}x{}",
                self.dot_width, self.dot_height, area.width, area.height
            )));
        }
        // A single step may not carry the dot further than the area is wide
        if self.dot_vel > area.width.max(area.height) {
            return Err(invalid(format!(
                "dot_vel {} exceeds movement area {}x{}",
                self.dot_vel, area.width, area.height
            )));
        }
        Ok(())
    }
}

/// Largest level side accepted; keeps position, velocity and camera sums
/// well inside `i32`
const MAX_EXTENT: i32 = i32::MAX / 4;

fn invalid(reason: String) -> Error {
    Error::InvalidConfig(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns(), 16);
        assert_eq!(config.rows(), 12);
        assert_eq!(config.total_tiles, 192);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json(r#"{ "dot_vel": 4, "bounds": "Level" }"#).unwrap();
        assert_eq!(config.dot_vel, 4);
        assert_eq!(config.bounds, MovementBounds::Level);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.movement_area(), Rect::new(0, 0, LEVEL_WIDTH, LEVEL_HEIGHT));
    }

    #[test]
    fn test_rejects_mismatched_tile_count() {
        let err = EngineConfig::from_json(r#"{ "total_tiles": 100 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_screen_larger_than_level() {
        let config = EngineConfig {
            screen_width: 2000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_step_larger_than_movement_area() {
        let err = EngineConfig::from_json(r#"{ "dot_vel": 2147483647 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        // The whole screen width in one step is still allowed
        let config = EngineConfig::from_json(r#"{ "dot_vel": 640 }"#).unwrap();
        assert_eq!(config.dot_vel, 640);
        assert!(EngineConfig::from_json(r#"{ "dot_vel": 641 }"#).is_err());
    }

    #[test]
    fn test_rejects_cell_count_overflow() {
        let config = EngineConfig {
            level_width: 100_000,
            level_height: 100_000,
            tile_width: 1,
            tile_height: 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = EngineConfig {
            level_width: i32::MAX,
            level_height: i32::MAX,
            tile_width: 1,
            tile_height: 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_largest_step_never_overflows() {
        use crate::sim::{Direction, Dot, TileGrid};
        use glam::IVec2;

        let config = EngineConfig {
            dot_vel: 640,
            ..Default::default()
        };
        config.validate().unwrap();
        let grid = TileGrid::default();
        let mut dot = Dot::new(IVec2::new(620, 460));
        dot.handle_input(Direction::Right, true, &config);
        dot.handle_input(Direction::Down, true, &config);
        dot.step(&grid, &config);
        assert_eq!(dot.pos, IVec2::new(620, 460));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = EngineConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_bounds_from_str() {
        assert_eq!(MovementBounds::from_str("LEVEL"), Some(MovementBounds::Level));
        assert_eq!(MovementBounds::from_str("screen"), Some(MovementBounds::Screen));
        assert_eq!(MovementBounds::from_str("world"), None);
        assert_eq!(MovementBounds::Level.as_str(), "Level");
    }
}
