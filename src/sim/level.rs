//! Level construction
//!
//! Map files are plain text: one tile kind id per cell separated by any
//! whitespace, filled row-major from the level origin.

use std::path::Path;

use super::tile::{Tile, TileGrid, TileKind};
use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// Parse a tile map into a grid of exactly `config.total_tiles` tiles
pub fn parse_map(text: &str, config: &EngineConfig) -> Result<TileGrid> {
    config.validate()?;

    let mut tokens = text.split_whitespace();
    let mut tiles = Vec::with_capacity(config.total_tiles);
    let (mut x, mut y) = (0, 0);

    for index in 0..config.total_tiles {
        let token = tokens.next().ok_or(Error::TileCount {
            expected: config.total_tiles,
            found: index,
        })?;
        let id: i64 = token.parse().map_err(|_| Error::BadTileToken {
            index,
            token: token.to_string(),
        })?;
        let kind = TileKind::from_id(id).ok_or(Error::UnknownTileKind { index, id })?;
        tiles.push(Tile::new(x, y, config.tile_width, config.tile_height, kind));

        x += config.tile_width;
        if x >= config.level_width {
            x = 0;
            y += config.tile_height;
        }
    }

    let extra = tokens.count();
    if extra > 0 {
        return Err(Error::TileCount {
            expected: config.total_tiles,
            found: config.total_tiles + extra,
        });
    }

    log::info!(
        "Parsed level map: {} tiles, {} solid",
        tiles.len(),
        tiles.iter().filter(|t| t.is_solid()).count()
    );
    Ok(TileGrid::regular(tiles, config.columns() as usize))
}

/// Read and parse a map file
pub fn load_map(path: impl AsRef<Path>, config: &EngineConfig) -> Result<TileGrid> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("Loading level map from {}", path.display());
    parse_map(&text, config)
}

/// Level enclosed by auto-tiled walls, with floor inside and a few pillars
pub fn walled(config: &EngineConfig) -> Result<TileGrid> {
    config.validate()?;

    let (cols, rows) = (config.columns(), config.rows());
    let mut tiles = Vec::with_capacity(config.total_tiles);
    for row in 0..rows {
        for col in 0..cols {
            let kind = wall_kind(col, row, cols, rows);
            tiles.push(Tile::new(
                col * config.tile_width,
                row * config.tile_height,
                config.tile_width,
                config.tile_height,
                kind,
            ));
        }
    }
    Ok(TileGrid::regular(tiles, cols as usize))
}

fn wall_kind(col: i32, row: i32, cols: i32, rows: i32) -> TileKind {
    let (left, right) = (col == 0, col == cols - 1);
    let (top, bottom) = (row == 0, row == rows - 1);
    match (left, right, top, bottom) {
        (true, _, true, _) => TileKind::TopLeft,
        (_, true, true, _) => TileKind::TopRight,
        (true, _, _, true) => TileKind::BottomLeft,
        (_, true, _, true) => TileKind::BottomRight,
        (_, _, true, _) => TileKind::Top,
        (_, _, _, true) => TileKind::Bottom,
        (true, _, _, _) => TileKind::Left,
        (_, true, _, _) => TileKind::Right,
        _ if col % 4 == 2 && row % 4 == 2 => TileKind::Center,
        _ => match (col + row) % 3 {
            0 => TileKind::Red,
            1 => TileKind::Green,
            _ => TileKind::Blue,
        },
    }
}
