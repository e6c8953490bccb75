//! Board geometry: grid dimensions, cell addressing, and opened cells.
//!
//! Cells are addressed as [`Cell`] (`glam::UVec2`) with `x` as the column and `y` as the
//! row. Every iteration over a board is row-major: `y` ascending, then `x` ascending.
use glam::UVec2;

use crate::error::{Error, Result};

pub mod opened;

pub use opened::OpenedCells;

/// Width of the standard board in cells.
pub const GRID_WIDTH: u32 = 9;

/// Height of the standard board in cells.
pub const GRID_HEIGHT: u32 = 5;

/// A grid cell coordinate (`x` = column, `y` = row).
pub type Cell = UVec2;

/// Dimensions of a rectangular board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Default for GridSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl GridSize {
    /// The 9x5 board every catalog scenario is played on.
    pub const STANDARD: GridSize = GridSize {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
    };

    /// Creates a grid size, rejecting empty dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Validates the dimensions, returning an error if either is zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(
                "grid width and height must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the cell lies inside the board.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major index of an in-bounds cell.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Returns `Ok(cell)` if in bounds, otherwise [`Error::CellOutOfBounds`].
    pub fn check(&self, cell: Cell) -> Result<Cell> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(Error::CellOutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}
