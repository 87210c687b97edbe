//! Game state and core simulation types
//!
//! Everything the frame loop owns: the dot, the camera, the tile field and
//! the configuration they were built with.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::collision::{AxisSeparated, Resolver};
use super::rect::Rect;
use super::tile::TileGrid;
use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// Current phase of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames advance normally
    Playing,
    /// A quit was requested; ticks are ignored
    Quit,
}

/// Directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step on screen axes (y grows downward)
    pub fn unit(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

/// The player-controlled dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dot {
    /// Top-left corner in world pixels
    pub pos: IVec2,
    /// Sum of the contributions of every held direction
    pub vel: IVec2,
}

impl Dot {
    pub fn new(pos: IVec2) -> Self {
        Self {
            pos,
            vel: IVec2::ZERO,
        }
    }

    /// Collision box at the current position
    #[inline]
    pub fn collision_box(&self, config: &EngineConfig) -> Rect {
        Rect::new(self.pos.x, self.pos.y, config.dot_width, config.dot_height)
    }

    /// Center point, rounded toward the top-left
    pub fn center(&self, config: &EngineConfig) -> IVec2 {
        self.pos + IVec2::new(config.dot_width / 2, config.dot_height / 2)
    }

    /// Apply a press (`pressed = true`) or release of `direction`
    ///
    /// A release subtracts exactly what the press added, so opposite held
    /// directions cancel and releasing one leaves the other in effect.
    pub fn handle_input(&mut self, direction: Direction, pressed: bool, config: &EngineConfig) {
        let delta = direction.unit() * config.dot_vel;
        if pressed {
            self.vel += delta;
        } else {
            self.vel -= delta;
        }
    }

    /// Advance one frame with the default axis-separated resolution
    pub fn step(&mut self, grid: &TileGrid, config: &EngineConfig) {
        self.step_with(&AxisSeparated, grid, config);
    }

    /// Advance one frame with a custom resolution strategy
    pub fn step_with<R: Resolver + ?Sized>(
        &mut self,
        resolver: &R,
        grid: &TileGrid,
        config: &EngineConfig,
    ) {
        resolver.resolve(self, grid, config);
    }
}

/// True if a dot at `pos` sits inside the movement area and clear of solid tiles
pub fn is_free_spawn(pos: IVec2, grid: &TileGrid, config: &EngineConfig) -> bool {
    let bbox = Dot::new(pos).collision_box(config);
    bbox.is_within(&config.movement_area()) && !grid.collides_any(&bbox)
}

/// Complete frame-loop state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: EngineConfig,
    pub grid: TileGrid,
    pub dot: Dot,
    pub camera: Camera,
    pub phase: GamePhase,
    /// Frames advanced so far
    pub frame: u64,
}

impl GameState {
    /// Build a state with the dot at `spawn`
    ///
    /// Fails with [`Error::InvalidLevelState`] if the spawn box overlaps a
    /// solid tile or leaves the movement area, since the dot could never move.
    pub fn new(config: EngineConfig, grid: TileGrid, spawn: IVec2) -> Result<Self> {
        config.validate()?;
        if !is_free_spawn(spawn, &grid, &config) {
            return Err(Error::InvalidLevelState {
                x: spawn.x,
                y: spawn.y,
            });
        }
        Ok(Self::assemble(config, grid, spawn))
    }

    /// Like [`GameState::new`], but if `preferred` is blocked the dot is placed
    /// at the first free tile-cell origin in row-major order
    pub fn with_fallback_spawn(config: EngineConfig, grid: TileGrid, preferred: IVec2) -> Result<Self> {
        config.validate()?;
        if is_free_spawn(preferred, &grid, &config) {
            return Ok(Self::assemble(config, grid, preferred));
        }

        let fallback = (0..config.rows())
            .flat_map(|row| (0..config.columns()).map(move |col| (col, row)))
            .map(|(col, row)| IVec2::new(col * config.tile_width, row * config.tile_height))
            .find(|&pos| is_free_spawn(pos, &grid, &config));

        match fallback {
            Some(pos) => {
                log::warn!(
                    "Spawn ({}, {}) is blocked, falling back to ({}, {})",
                    preferred.x,
                    preferred.y,
                    pos.x,
                    pos.y
                );
                Ok(Self::assemble(config, grid, pos))
            }
            None => Err(Error::InvalidLevelState {
                x: preferred.x,
                y: preferred.y,
            }),
        }
    }

    fn assemble(config: EngineConfig, grid: TileGrid, spawn: IVec2) -> Self {
        let dot = Dot::new(spawn);
        let camera = Camera::recompute(&dot, &config);
        log::debug!(
            "Level ready: {} tiles, dot at ({}, {})",
            grid.len(),
            spawn.x,
            spawn.y
        );
        Self {
            config,
            grid,
            dot,
            camera,
            phase: GamePhase::Playing,
            frame: 0,
        }
    }
}
