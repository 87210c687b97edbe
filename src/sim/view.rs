//! Per-frame render snapshot
//!
//! What a renderer needs to draw one frame, already culled against the
//! camera and translated to screen space.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::GameState;
use super::tile::TileKind;

/// One visible tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSprite {
    pub kind: TileKind,
    /// Source rectangle on the tile sprite sheet
    pub clip: Rect,
    /// Destination rectangle in screen space
    pub dest: Rect,
}

/// Draw list for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    /// Camera in world space
    pub camera: Rect,
    /// Dot in screen space
    pub dot: Rect,
    /// Visible tiles in grid order
    pub tiles: Vec<TileSprite>,
}

impl GameState {
    /// Snapshot the current frame for drawing
    pub fn view(&self) -> FrameView {
        let camera = self.camera;
        let (tw, th) = (self.config.tile_width, self.config.tile_height);
        let tiles = self
            .grid
            .tiles()
            .iter()
            .filter(|tile| camera.is_visible(&tile.bbox()))
            .map(|tile| TileSprite {
                kind: tile.kind(),
                clip: tile.kind().sprite_clip(tw, th),
                dest: camera.world_to_screen(tile.bbox()),
            })
            .collect();

        FrameView {
            camera: camera.rect(),
            dot: camera.world_to_screen(self.dot.collision_box(&self.config)),
            tiles,
        }
    }
}
