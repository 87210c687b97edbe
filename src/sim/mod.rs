//! Deterministic simulation module
//!
//! All movement logic lives here. This module must stay pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (tile grid order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;
pub mod tile;
pub mod view;

pub use autopilot::Autopilot;
pub use camera::Camera;
pub use collision::{AxisSeparated, Resolver, collides_any};
pub use rect::{Rect, intersects};
pub use state::{Direction, Dot, GamePhase, GameState, is_free_spawn};
pub use tick::{FrameEvent, tick};
pub use tile::{Tile, TileGrid, TileKind};
pub use view::{FrameView, TileSprite};
