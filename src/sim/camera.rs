//! Viewport that follows the dot
//!
//! Recomputed from scratch every frame; it has no state of its own beyond
//! the last result.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Dot;
use crate::config::EngineConfig;

/// Screen-sized window into the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    rect: Rect,
}

impl Camera {
    /// Center the viewport on the dot, then clamp it inside the level
    pub fn recompute(dot: &Dot, config: &EngineConfig) -> Self {
        let center = dot.center(config);
        let mut x = center.x - config.screen_width / 2;
        let mut y = center.y - config.screen_height / 2;

        if x < 0 {
            x = 0;
        }
        if y < 0 {
            y = 0;
        }
        if x + config.screen_width > config.level_width {
            x = config.level_width - config.screen_width;
        }
        if y + config.screen_height > config.level_height {
            y = config.level_height - config.screen_height;
        }

        Self {
            rect: Rect::new(x, y, config.screen_width, config.screen_height),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// True if any part of `world` is on screen
    pub fn is_visible(&self, world: &Rect) -> bool {
        self.rect.intersects(world)
    }

    /// Translate a world-space rectangle into screen space
    pub fn world_to_screen(&self, world: Rect) -> Rect {
        world.translated(-self.rect.x, -self.rect.y)
    }
}
