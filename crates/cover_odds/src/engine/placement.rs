//! Placement enumeration.
//!
//! A placement is one top-left anchor for one orientation whose footprint lies fully
//! inside the board and touches no opened cell. Placements that overlap even a single
//! opened cell are discarded entirely.
use glam::UVec2;

use crate::board::{Cell, GridSize, OpenedCells};
use crate::objects::{ObjectType, Orientation};

/// A candidate footprint for a single object instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Top-left covered cell.
    pub anchor: Cell,
    /// Footprint as `(width, height)`.
    pub size: UVec2,
}

impl Placement {
    pub fn new(anchor: Cell, orientation: Orientation) -> Self {
        Self {
            anchor,
            size: orientation.size,
        }
    }

    /// Covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let Placement { anchor, size } = *self;
        (0..size.y).flat_map(move |dy| (0..size.x).map(move |dx| anchor + UVec2::new(dx, dy)))
    }

    /// Whether the footprint includes `cell`.
    pub fn covers(&self, cell: Cell) -> bool {
        cell.x >= self.anchor.x
            && cell.y >= self.anchor.y
            && cell.x - self.anchor.x < self.size.x
            && cell.y - self.anchor.y < self.size.y
    }

    /// Number of covered cells.
    pub fn area(&self) -> u32 {
        self.size.x * self.size.y
    }
}

/// Enumerates the valid placements of one orientation, row-major by anchor.
///
/// Degenerate footprints (a zero dimension) and footprints larger than the board yield
/// no placements.
pub fn orientation_placements<'a>(
    size: GridSize,
    orientation: Orientation,
    opened: &'a OpenedCells,
) -> impl Iterator<Item = Placement> + 'a {
    let (w, h) = (orientation.width(), orientation.height());
    let anchors = match (size.width.checked_sub(w), size.height.checked_sub(h)) {
        (Some(max_x), Some(max_y)) if w > 0 && h > 0 => Some((max_x, max_y)),
        _ => None,
    };

    anchors
        .into_iter()
        .flat_map(|(max_x, max_y)| {
            (0..=max_y).flat_map(move |y| (0..=max_x).map(move |x| Cell::new(x, y)))
        })
        .map(move |anchor| Placement::new(anchor, orientation))
        .filter(move |placement| !placement.cells().any(|cell| opened.contains(cell)))
}

/// All valid placements of an object type across its orientations.
pub fn valid_placements(
    size: GridSize,
    object: &ObjectType,
    opened: &OpenedCells,
) -> Vec<Placement> {
    object
        .orientations()
        .flat_map(|orientation| orientation_placements(size, orientation, opened))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> GridSize {
        GridSize::STANDARD
    }

    #[test]
    fn anchor_ranges_are_inclusive() {
        let opened = OpenedCells::new();
        let placements: Vec<_> =
            orientation_placements(standard(), Orientation::new(3, 2), &opened).collect();
        // (9 - 3 + 1) * (5 - 2 + 1)
        assert_eq!(placements.len(), 28);
        assert_eq!(placements.first().unwrap().anchor, Cell::new(0, 0));
        assert_eq!(placements.last().unwrap().anchor, Cell::new(6, 3));
    }

    #[test]
    fn both_orientations_are_counted() {
        let opened = OpenedCells::new();
        let object = ObjectType::new(3, 2, 1);
        // 3x2: 7 * 4, 2x3: 8 * 3
        assert_eq!(valid_placements(standard(), &object, &opened).len(), 28 + 24);
    }

    #[test]
    fn square_is_enumerated_once() {
        let opened = OpenedCells::new();
        let object = ObjectType::new(2, 2, 1);
        assert_eq!(valid_placements(standard(), &object, &opened).len(), 8 * 4);
    }

    #[test]
    fn opened_cell_removes_every_overlapping_placement() {
        let opened: OpenedCells = [Cell::new(4, 2)].into_iter().collect();
        let object = ObjectType::new(1, 1, 1);
        let placements = valid_placements(standard(), &object, &opened);
        assert_eq!(placements.len(), 44);
        assert!(placements.iter().all(|p| !p.covers(Cell::new(4, 2))));

        let bar = ObjectType::new(3, 1, 1);
        let placements = valid_placements(standard(), &bar, &opened);
        // horizontal: 35 - 3 blocked, vertical: 27 - 3 blocked
        assert_eq!(placements.len(), 32 + 24);
    }

    #[test]
    fn oversized_and_degenerate_objects_have_no_placements() {
        let opened = OpenedCells::new();
        for object in [
            ObjectType::new(10, 1, 1),
            ObjectType::new(10, 6, 1),
            ObjectType::new(0, 2, 1),
            ObjectType::new(3, 0, 1),
        ] {
            assert!(
                valid_placements(standard(), &object, &opened).is_empty(),
                "{object:?}"
            );
        }
    }

    #[test]
    fn tall_object_fits_only_when_transposed() {
        let opened = OpenedCells::new();
        let object = ObjectType::new(1, 6, 1);
        let placements = valid_placements(standard(), &object, &opened);
        assert_eq!(placements.len(), 4 * 5);
        assert!(placements.iter().all(|p| p.size == UVec2::new(6, 1)));
    }

    #[test]
    fn cells_and_covers_agree() {
        let placement = Placement::new(Cell::new(2, 1), Orientation::new(3, 2));
        let cells: Vec<_> = placement.cells().collect();
        assert_eq!(cells.len() as u32, placement.area());
        assert_eq!(cells[0], Cell::new(2, 1));
        assert_eq!(cells[5], Cell::new(4, 2));
        for cell in GridSize::STANDARD.cells() {
            assert_eq!(placement.covers(cell), cells.contains(&cell));
        }
    }
}
