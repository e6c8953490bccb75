//! Per-cell probability storage.
use crate::board::{Cell, GridSize};
use crate::error::{Error, Result};

/// Row-major matrix of per-cell coverage probabilities in `[0, 1]`.
///
/// A transient computation result: it is rebuilt from scratch whenever objects or opened
/// cells change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbabilityGrid {
    size: GridSize,
    data: Vec<f64>,
}

impl ProbabilityGrid {
    /// Create an all-zero grid of the given size.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            data: vec![0.0; size.cell_count()],
        }
    }

    /// Build a grid from row-major values.
    pub fn from_values(size: GridSize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size.cell_count() {
            return Err(Error::InvalidConfig(format!(
                "expected {} values for a {}x{} grid, got {}",
                size.cell_count(),
                size.width,
                size.height,
                data.len()
            )));
        }
        if let Some(bad) = data.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(Error::InvalidConfig(format!(
                "probability {bad} is outside [0, 1]"
            )));
        }
        Ok(Self { size, data })
    }

    /// Build a grid by evaluating `f` for every cell.
    pub fn from_fn(size: GridSize, f: impl FnMut(Cell) -> f64) -> Self {
        Self {
            size,
            data: size.cells().map(f).collect(),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Get the value at `cell`, returning `0.0` if out of bounds.
    pub fn get(&self, cell: Cell) -> f64 {
        self.size.index(cell).map_or(0.0, |i| self.data[i])
    }

    /// Get the value at `(x, y)`, returning `0.0` if out of bounds.
    pub fn get_xy(&self, x: u32, y: u32) -> f64 {
        self.get(Cell::new(x, y))
    }

    /// Set the value at `cell`. Out-of-bounds cells are ignored and return `false`.
    pub fn set(&mut self, cell: Cell, value: f64) -> bool {
        match self.size.index(cell) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Iterate `(cell, probability)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.size.cells().zip(self.data.iter().copied())
    }

    /// Iterate rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.size.width.max(1) as usize)
    }

    /// Largest value on the grid, `0.0` for an empty grid.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Mean value across all cells.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }
}
