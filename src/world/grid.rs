use thiserror::Error;

/// Raw cell value as stored in the map asset.
///
/// * `0`: empty, walkable
/// * `> 0`: wall; for textured maps the value doubles as the 1-based
///   texture id
/// * `-1`: never stored, returned by lookups that leave the map
pub type Tile = i32;

pub const EMPTY: Tile = 0;

/// Sentinel for "outside the map". The raycaster treats it as a normal
/// exit condition, not an error.
pub const OUT_OF_BOUNDS: Tile = -1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("map has no cells")]
    Empty,

    #[error("cell count {got} does not match {width}x{height}")]
    SizeMismatch {
        width: usize,
        height: usize,
        got: usize,
    },

    #[error("negative cell value {value} at ({x}, {y})")]
    NegativeCell { x: usize, y: usize, value: Tile },
}

/// Immutable row-major tile array (read-only after load).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl GridMap {
    pub fn new(width: usize, height: usize, cells: Vec<Tile>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != width * height {
            return Err(GridError::SizeMismatch {
                width,
                height,
                got: cells.len(),
            });
        }
        if let Some(i) = cells.iter().position(|&c| c < 0) {
            return Err(GridError::NegativeCell {
                x: i % width,
                y: i / width,
                value: cells[i],
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Look up the cell containing the grid-space point `(x, y)`.
    ///
    /// The raw coordinates must lie in `[0, width-1] × [0, height-1]`,
    /// otherwise the result is [`OUT_OF_BOUNDS`]. Inside that range both are
    /// truncated toward zero, so the last column / row is only reachable at
    /// its left / top edge.
    #[inline]
    pub fn get(&self, x: f64, y: f64) -> Tile {
        let (max_x, max_y) = ((self.width - 1) as f64, (self.height - 1) as f64);
        // written as a negated range test so NaN lands outside
        if !((0.0..=max_x).contains(&x) && (0.0..=max_y).contains(&y)) {
            return OUT_OF_BOUNDS;
        }
        self.at(x as i64, y as i64)
    }

    /// Integer-cell variant of [`GridMap::get`], used by the DDA walk.
    #[inline]
    pub fn at(&self, x: i64, y: i64) -> Tile {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return OUT_OF_BOUNDS;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// `true` only for in-bounds empty cells.
    #[inline]
    pub fn is_walkable(&self, x: f64, y: f64) -> bool {
        self.get(x, y) == EMPTY
    }

    /// Rows of the map, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks_exact(self.width)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
