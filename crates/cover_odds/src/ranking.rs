//! Ranking utilities for highlighting the most likely cells.
//!
//! [`rank_cells`] sorts closed cells by probability and returns two tiers:
//! - top: every cell sharing the maximum probability (exact equality, unbounded)
//! - second: cells sharing the next distinct value, capped by [`RankConfig::second_tier_cap`]
//!
//! Ties keep row-major order (`y`, then `x`), so results are deterministic.
use crate::board::{Cell, OpenedCells};
use crate::engine::grid::ProbabilityGrid;

/// Default cap on the second tier. A display limit rather than a model constraint.
pub const DEFAULT_SECOND_TIER_CAP: usize = 2;

/// Highlight tier of a ranked cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    Top,
    Second,
}

/// Configuration for [`rank_cells_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankConfig {
    /// Maximum number of cells reported in the second tier.
    pub second_tier_cap: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            second_tier_cap: DEFAULT_SECOND_TIER_CAP,
        }
    }
}

impl RankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the second tier cap.
    pub fn with_second_tier_cap(mut self, cap: usize) -> Self {
        self.second_tier_cap = cap;
        self
    }
}

/// Top and second tier cells, each in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranking {
    pub top: Vec<Cell>,
    pub second: Vec<Cell>,
}

impl Ranking {
    pub fn tier_of(&self, cell: Cell) -> Option<Tier> {
        if self.top.contains(&cell) {
            Some(Tier::Top)
        } else if self.second.contains(&cell) {
            Some(Tier::Second)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.second.is_empty()
    }
}

/// Ranks closed cells with the default second tier cap.
pub fn rank_cells(grid: &ProbabilityGrid, opened: &OpenedCells) -> Ranking {
    rank_cells_with(grid, opened, &RankConfig::default())
}

pub fn rank_cells_with(
    grid: &ProbabilityGrid,
    opened: &OpenedCells,
    config: &RankConfig,
) -> Ranking {
    let mut candidates: Vec<(Cell, f64)> = grid
        .iter()
        .filter(|(cell, _)| !opened.contains(*cell))
        .collect();
    // Stable, so equal values keep scan order.
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    let Some(&(_, max)) = candidates.first() else {
        return Ranking::default();
    };

    let split = candidates
        .iter()
        .position(|&(_, p)| p != max)
        .unwrap_or(candidates.len());
    let top = candidates[..split].iter().map(|&(cell, _)| cell).collect();

    let rest = &candidates[split..];
    let second = match rest.first() {
        Some(&(_, next)) => rest
            .iter()
            .take_while(|&&(_, p)| p == next)
            .take(config.second_tier_cap)
            .map(|&(cell, _)| cell)
            .collect(),
        None => Vec::new(),
    };

    Ranking { top, second }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GridSize;

    fn grid(width: u32, height: u32, values: &[f64]) -> ProbabilityGrid {
        ProbabilityGrid::from_values(GridSize::new(width, height).unwrap(), values.to_vec())
            .unwrap()
    }

    fn cells(list: &[(u32, u32)]) -> Vec<Cell> {
        list.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn ties_at_the_top_are_unbounded() {
        let g = grid(3, 2, &[0.9, 0.2, 0.9, 0.9, 0.5, 0.9]);
        let ranking = rank_cells(&g, &OpenedCells::new());
        assert_eq!(ranking.top, cells(&[(0, 0), (2, 0), (0, 1), (2, 1)]));
        assert_eq!(ranking.second, cells(&[(1, 1)]));
    }

    #[test]
    fn second_tier_is_capped_at_two() {
        // Four cells share the second value; only the first two in scan order are kept.
        let g = grid(3, 2, &[0.4, 0.7, 0.4, 0.4, 0.1, 0.4]);
        let ranking = rank_cells(&g, &OpenedCells::new());
        assert_eq!(ranking.top, cells(&[(1, 0)]));
        assert_eq!(ranking.second, cells(&[(0, 0), (2, 0)]));
    }

    #[test]
    fn cap_is_configurable() {
        let g = grid(3, 2, &[0.4, 0.7, 0.4, 0.4, 0.1, 0.4]);
        let opened = OpenedCells::new();
        let wide = rank_cells_with(&g, &opened, &RankConfig::new().with_second_tier_cap(10));
        assert_eq!(wide.second, cells(&[(0, 0), (2, 0), (0, 1), (2, 1)]));
        let none = rank_cells_with(&g, &opened, &RankConfig::new().with_second_tier_cap(0));
        assert!(none.second.is_empty());
    }

    #[test]
    fn opened_cells_are_excluded() {
        let g = grid(2, 2, &[0.0, 0.8, 0.6, 0.6]);
        let opened: OpenedCells = [Cell::new(1, 0)].into_iter().collect();
        let ranking = rank_cells(&g, &opened);
        assert_eq!(ranking.top, cells(&[(0, 1), (1, 1)]));
        assert_eq!(ranking.second, cells(&[(0, 0)]));
        assert_eq!(ranking.tier_of(Cell::new(1, 0)), None);
    }

    #[test]
    fn uniform_grid_has_no_second_tier() {
        let g = grid(2, 1, &[0.3, 0.3]);
        let ranking = rank_cells(&g, &OpenedCells::new());
        assert_eq!(ranking.top.len(), 2);
        assert!(ranking.second.is_empty());
    }

    #[test]
    fn all_cells_opened_yields_empty_tiers() {
        let g = grid(2, 2, &[0.0; 4]);
        let opened: OpenedCells = GridSize::new(2, 2).unwrap().cells().collect();
        let ranking = rank_cells(&g, &opened);
        assert!(ranking.is_empty());
    }

    #[test]
    fn tier_of_reports_membership() {
        let g = grid(3, 1, &[0.9, 0.5, 0.1]);
        let ranking = rank_cells(&g, &OpenedCells::new());
        assert_eq!(ranking.tier_of(Cell::new(0, 0)), Some(Tier::Top));
        assert_eq!(ranking.tier_of(Cell::new(1, 0)), Some(Tier::Second));
        assert_eq!(ranking.tier_of(Cell::new(2, 0)), None);
    }
}
