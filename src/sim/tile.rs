//! Tiles and the static tile grid
//!
//! A level is a fixed sequence of tiles created once at load time and never
//! mutated during play.

use serde::{Deserialize, Serialize};

use super::collision::collides_any;
use super::rect::Rect;

/// Tile kinds, in map-file id order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Red,
    Green,
    Blue,
    Center,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl TileKind {
    /// Number of tile kinds
    pub const COUNT: usize = 12;

    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Red,
        TileKind::Green,
        TileKind::Blue,
        TileKind::Center,
        TileKind::Top,
        TileKind::TopRight,
        TileKind::Right,
        TileKind::BottomRight,
        TileKind::Bottom,
        TileKind::BottomLeft,
        TileKind::Left,
        TileKind::TopLeft,
    ];

    /// Kind for a map-file id
    pub fn from_id(id: i64) -> Option<Self> {
        usize::try_from(id).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Map-file id
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Terrain pieces block movement; color tiles are floor
    pub fn is_solid(self) -> bool {
        !matches!(self, TileKind::Red | TileKind::Green | TileKind::Blue)
    }

    /// Source rectangle of this kind on a sprite sheet of `w`x`h` cells
    pub fn sprite_clip(self, w: i32, h: i32) -> Rect {
        let (col, row) = match self {
            TileKind::Red => (0, 0),
            TileKind::Green => (0, 1),
            TileKind::Blue => (0, 2),
            TileKind::TopLeft => (1, 0),
            TileKind::Left => (1, 1),
            TileKind::BottomLeft => (1, 2),
            TileKind::Top => (2, 0),
            TileKind::Center => (2, 1),
            TileKind::Bottom => (2, 2),
            TileKind::TopRight => (3, 0),
            TileKind::Right => (3, 1),
            TileKind::BottomRight => (3, 2),
        };
        Rect::new(col * w, row * h, w, h)
    }
}

/// A single immutable tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    bbox: Rect,
    kind: TileKind,
}

impl Tile {
    pub fn new(x: i32, y: i32, width: i32, height: i32, kind: TileKind) -> Self {
        Self {
            bbox: Rect::new(x, y, width, height),
            kind,
        }
    }

    #[inline]
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    #[inline]
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.kind.is_solid()
    }
}

/// Read-only tile field the dot moves against
///
/// Collision queries scan every tile, O(n) per call. Fine for a couple of
/// hundred tiles; a spatial index would be needed well beyond that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    /// Columns of a regular grid, 0 when tiles were placed freely
    #[serde(default)]
    columns: usize,
}

impl TileGrid {
    /// Grid of freely placed tiles
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles, columns: 0 }
    }

    /// Row-major grid with `columns` tiles per row starting at the origin
    pub(crate) fn regular(tiles: Vec<Tile>, columns: usize) -> Self {
        Self { tiles, columns }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn solid_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().filter(|t| t.is_solid())
    }

    /// True if `rect` overlaps any solid tile
    pub fn collides_any(&self, rect: &Rect) -> bool {
        collides_any(rect, self.solid_tiles())
    }

    /// Tile covering world point `(x, y)`
    ///
    /// Direct cell lookup on regular grids, linear search otherwise.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&Tile> {
        let contains = |t: &&Tile| {
            let b = t.bbox();
            x >= b.x && x < b.right() && y >= b.y && y < b.bottom()
        };
        if self.columns == 0 {
            return self.tiles.iter().find(contains);
        }
        let first = self.tiles.first()?.bbox();
        if x < 0 || y < 0 {
            return None;
        }
        let col = (x / first.width) as usize;
        let row = (y / first.height) as usize;
        if col >= self.columns {
            return None;
        }
        self.tiles.get(row * self.columns + col).filter(contains)
    }
}
