//! Collision queries and movement resolution
//!
//! Movement is resolved one axis at a time: the X step is applied and either
//! kept or fully undone before the Y step is attempted. This lets the dot
//! slide along a wall when moving diagonally into it, but it does not handle
//! true corner hits.

use super::rect::Rect;
use super::state::Dot;
use super::tile::{Tile, TileGrid};
use crate::config::EngineConfig;

/// True if `rect` overlaps any of `tiles`; stops at the first hit
pub fn collides_any<'a>(rect: &Rect, tiles: impl IntoIterator<Item = &'a Tile>) -> bool {
    tiles.into_iter().any(|tile| rect.intersects(&tile.bbox()))
}

/// Strategy for moving the dot by its velocity against a tile field
pub trait Resolver {
    fn resolve(&self, dot: &mut Dot, grid: &TileGrid, config: &EngineConfig);
}

/// Sequential per-axis movement with full-step rollback
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisSeparated;

impl Resolver for AxisSeparated {
    fn resolve(&self, dot: &mut Dot, grid: &TileGrid, config: &EngineConfig) {
        let area = config.movement_area();
        let vel = dot.vel;

        dot.pos.x += vel.x;
        let bbox = dot.collision_box(config);
        if bbox.x < area.x || bbox.right() > area.right() || grid.collides_any(&bbox) {
            dot.pos.x -= vel.x;
        }

        dot.pos.y += vel.y;
        let bbox = dot.collision_box(config);
        if bbox.y < area.y || bbox.bottom() > area.bottom() || grid.collides_any(&bbox) {
            dot.pos.y -= vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TileKind;
    use glam::IVec2;

    fn wall(x: i32, y: i32) -> Tile {
        Tile::new(x, y, 80, 80, TileKind::Center)
    }

    fn moving_dot(x: i32, y: i32, vx: i32, vy: i32) -> Dot {
        Dot {
            pos: IVec2::new(x, y),
            vel: IVec2::new(vx, vy),
        }
    }

    #[test]
    fn test_collides_any_short_circuits_on_first_hit() {
        let tiles = [wall(0, 0), wall(200, 0)];
        assert!(collides_any(&Rect::new(10, 10, 5, 5), &tiles));
        assert!(collides_any(&Rect::new(210, 10, 5, 5), &tiles));
        assert!(!collides_any(&Rect::new(100, 10, 5, 5), &tiles));
        assert!(!collides_any(&Rect::new(0, 0, 5, 5), std::iter::empty::<&Tile>()));
    }

    #[test]
    fn test_collides_any_counts_floor_tiles() {
        let floor = [Tile::new(0, 0, 80, 80, TileKind::Red)];
        assert!(collides_any(&Rect::new(10, 10, 5, 5), &floor));
    }

    #[test]
    fn test_diagonal_into_wall_slides_along_it() {
        let config = EngineConfig::default();
        // Wall directly to the right of the dot
        let grid = TileGrid::new(vec![wall(120, 80)]);
        let mut dot = moving_dot(100, 100, 10, 10);
        AxisSeparated.resolve(&mut dot, &grid, &config);
        assert_eq!(dot.pos, IVec2::new(100, 110));
    }

    #[test]
    fn test_rollback_undoes_the_whole_step() {
        let config = EngineConfig::default();
        // Gap of 5 pixels between the dot and the wall; a 10 pixel step is undone entirely
        let grid = TileGrid::new(vec![wall(125, 0)]);
        let mut dot = moving_dot(100, 0, 10, 0);
        AxisSeparated.resolve(&mut dot, &grid, &config);
        assert_eq!(dot.pos.x, 100);
    }

    #[test]
    fn test_screen_edges_block_each_axis() {
        let config = EngineConfig::default();
        let grid = TileGrid::default();

        let mut dot = moving_dot(0, 0, -10, -10);
        AxisSeparated.resolve(&mut dot, &grid, &config);
        assert_eq!(dot.pos, IVec2::ZERO);

        let mut dot = moving_dot(620, 460, 10, 10);
        AxisSeparated.resolve(&mut dot, &grid, &config);
        assert_eq!(dot.pos, IVec2::new(620, 460));

        // Flush against the right edge is allowed
        let mut dot = moving_dot(610, 0, 10, 0);
        AxisSeparated.resolve(&mut dot, &grid, &config);
        assert_eq!(dot.pos.x, 620);
    }
}
