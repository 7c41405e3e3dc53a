// Grid map: walkability and cell-to-world conversion
//
// Collision files are plain text:
//
//   min_x
//   max_x
//   min_y
//   max_y
//   0010...   <- row for y = max_y, one char per x from min_x to max_x
//   ...
//   0000...   <- row for y = min_y
//
// `1` marks a blocked cell, `0` a walkable one.

use std::path::{Path, PathBuf};

use glam::{IVec2, Vec3};
use thiserror::Error;

use crate::core::CellPos;

/// Largest grid a map may hold (4096 x 4096 cells)
pub const MAX_CELLS: usize = 1 << 24;

/// Map queries a creature needs while moving
pub trait MapQuery {
    /// Whether a creature may stand on `cell`
    fn can_move(&self, cell: CellPos) -> bool;
    /// World-space corner of `cell`
    fn cell_to_world(&self, cell: CellPos) -> Vec3;
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing bounds header line {line}")]
    MissingHeader { line: usize },
    #[error("invalid bounds value {value:?} on line {line}")]
    InvalidHeader { line: usize, value: String },
    #[error("inverted bounds: min {min} is greater than max {max}")]
    InvertedBounds { min: IVec2, max: IVec2 },
    #[error("bounds {min}..={max} span more than {} cells", MAX_CELLS)]
    TooLarge { min: IVec2, max: IVec2 },
    #[error("expected {expected} collision rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has width {found}, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {found:?} in row {row}")]
    InvalidCell { row: usize, found: char },
}

/// Rectangular collision grid
#[derive(Debug, Clone)]
pub struct GridMap {
    min: IVec2,
    max: IVec2,
    width: usize,
    height: usize,
    /// Row-major, row 0 is `max.y`
    blocked: Vec<bool>,
    /// World units per cell
    cell_size: f32,
    /// World position of cell (0, 0)
    origin: Vec3,
}

impl GridMap {
    /// A map where every cell inside the bounds is walkable
    pub fn open(min: IVec2, max: IVec2) -> Result<Self, MapError> {
        let (width, height) = grid_size(min, max)?;
        Ok(Self::from_cells(min, max, width, height, vec![false; width * height]))
    }

    fn from_cells(min: IVec2, max: IVec2, width: usize, height: usize, blocked: Vec<bool>) -> Self {
        Self {
            min,
            max,
            width,
            height,
            blocked,
            cell_size: 1.0,
            origin: Vec3::ZERO,
        }
    }

    /// Read and parse a collision file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&text)?;
        log::info!(
            "Loaded map {} ({}x{} cells)",
            path.display(),
            map.width(),
            map.height()
        );
        Ok(map)
    }

    /// Parse collision text (see module docs for the format)
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        let mut header = [0i32; 4];
        for (index, slot) in header.iter_mut().enumerate() {
            let line = index + 1;
            let value = lines.next().ok_or(MapError::MissingHeader { line })?;
            *slot = value.parse().map_err(|_| MapError::InvalidHeader {
                line,
                value: value.to_string(),
            })?;
        }
        let [min_x, max_x, min_y, max_y] = header;
        let min = IVec2::new(min_x, min_y);
        let max = IVec2::new(max_x, max_y);
        let (width, height) = grid_size(min, max)?;
        let rows: Vec<&str> = lines.collect();
        if rows.len() != height {
            return Err(MapError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }

        let mut blocked = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::RowWidth {
                    row,
                    expected: width,
                    found,
                });
            }
            for c in line.chars() {
                match c {
                    '0' => blocked.push(false),
                    '1' => blocked.push(true),
                    found => return Err(MapError::InvalidCell { row, found }),
                }
            }
        }

        Ok(Self::from_cells(min, max, width, height, blocked))
    }

    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn min(&self) -> IVec2 {
        self.min
    }

    pub fn max(&self) -> IVec2 {
        self.max
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        cell.cmpge(self.min).all() && cell.cmple(self.max).all()
    }

    /// Mark a cell blocked or walkable; cells outside the bounds are ignored
    pub fn set_blocked(&mut self, cell: CellPos, blocked: bool) {
        if let Some(index) = self.index(cell) {
            self.blocked[index] = blocked;
        }
    }

    fn index(&self, cell: CellPos) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let x = (cell.x - self.min.x) as usize;
        let y = (self.max.y - cell.y) as usize;
        Some(y * self.width + x)
    }
}

/// Cell counts along x and y for inclusive bounds.
/// Extents are taken in i64 so bounds near the i32 limits cannot overflow.
fn grid_size(min: IVec2, max: IVec2) -> Result<(usize, usize), MapError> {
    if min.x > max.x || min.y > max.y {
        return Err(MapError::InvertedBounds { min, max });
    }
    let extent = |lo: i32, hi: i32| usize::try_from(i64::from(hi) - i64::from(lo) + 1).ok();
    extent(min.x, max.x)
        .zip(extent(min.y, max.y))
        .filter(|(w, h)| w.checked_mul(*h).is_some_and(|cells| cells <= MAX_CELLS))
        .ok_or(MapError::TooLarge { min, max })
}

impl MapQuery for GridMap {
    fn can_move(&self, cell: CellPos) -> bool {
        self.index(cell).is_some_and(|index| !self.blocked[index])
    }

    fn cell_to_world(&self, cell: CellPos) -> Vec3 {
        self.origin + cell.as_vec2().extend(0.0) * self.cell_size
    }
}
