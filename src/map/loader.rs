// ──────────────────────────────────────────────────────────────────────────
// map/loader.rs
//
//  *   text asset (one row per line)   ──╮
//  *   MapFormat  (flat | textured)      │   --->  world::GridMap
//                                        ╯
// ──────────────────────────────────────────────────────────────────────────

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{info, warn};

use crate::world::{EMPTY, GridError, GridMap, Tile};

/// Cell value the flat format uses for its single wall type.
pub const FLAT_WALL: Tile = 1;

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum MapError {
    #[error("cannot read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("map contains no rows")]
    Empty,

    #[error("line {line}, column {column}: expected a digit 0-9, found {ch:?}")]
    BadDigit {
        line: usize,
        column: usize,
        ch: char,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// How a character of the asset maps to a cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MapFormat {
    /// `.` empty, `R` wall; anything else is read as empty.
    Flat,
    /// One decimal digit per cell, the digit is the texture id.
    #[default]
    Textured,
}

/*====================================================================*/
/*                       Public API                                   */
/*====================================================================*/

/// Read and parse the map asset at `path`.
pub fn load_map<P: AsRef<Path>>(path: P, format: MapFormat) -> Result<GridMap, MapError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_map(&text, format)?;
    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        ?format,
        "map loaded"
    );
    Ok(grid)
}

/// Parse map text. Width is the longest line; shorter lines are padded
/// with empty cells so every row keeps its column alignment.
pub fn parse_map(text: &str, format: MapFormat) -> Result<GridMap, MapError> {
    let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(MapError::Empty);
    }

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if width == 0 {
        return Err(MapError::Empty);
    }
    let height = lines.len();

    let mut cells = Vec::with_capacity(width * height);
    let mut stray = 0usize;
    let mut padded = 0usize;

    for (row, line) in lines.iter().enumerate() {
        let mut n = 0;
        for (col, ch) in line.chars().enumerate() {
            let tile = match format {
                MapFormat::Flat => match ch {
                    'R' => FLAT_WALL,
                    '.' => EMPTY,
                    _ => {
                        stray += 1;
                        EMPTY
                    }
                },
                MapFormat::Textured => match ch.to_digit(10) {
                    Some(d) => d as Tile,
                    None => {
                        return Err(MapError::BadDigit {
                            line: row + 1,
                            column: col + 1,
                            ch,
                        });
                    }
                },
            };
            cells.push(tile);
            n += 1;
        }
        if n < width {
            padded += 1;
            cells.resize(cells.len() + (width - n), EMPTY);
        }
    }

    if stray > 0 {
        warn!(stray, "unknown map characters read as empty cells");
    }
    if padded > 0 {
        warn!(rows = padded, width, "short map rows padded with empty cells");
    }

    Ok(GridMap::new(width, height, cells)?)
}

/*====================================================================*/
/*                               Tests                                */
/*====================================================================*/
