//! Monte Carlo sampling under the same independence model as the engine.
//!
//! Each remaining instance is drawn uniformly from its type's valid placements,
//! independently of every other instance. Averaging coverage over many sampled layouts
//! converges to [`crate::engine::compute_probabilities`].
use rand::Rng;

use crate::board::{GridSize, OpenedCells};
use crate::engine::grid::ProbabilityGrid;
use crate::engine::placement::{valid_placements, Placement};
use crate::objects::ObjectType;

/// One sampled instance of an object type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedObject {
    /// Position of the object type in the input list.
    pub object_index: usize,
    pub placement: Placement,
}

/// Generate a random float in the range [0, 1).
#[inline]
fn rand01(rng: &mut dyn Rng) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}

#[inline]
fn pick<'a, T>(items: &'a [T], rng: &mut dyn Rng) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let i = ((rand01(rng) * items.len() as f64) as usize).min(items.len() - 1);
    items.get(i)
}

fn placements_per_type(
    size: GridSize,
    objects: &[ObjectType],
    opened: &OpenedCells,
) -> Vec<Vec<Placement>> {
    objects
        .iter()
        .map(|object| {
            if object.remaining() == 0 {
                Vec::new()
            } else {
                valid_placements(size, object, opened)
            }
        })
        .collect()
}

fn draw(
    candidates: &[Vec<Placement>],
    objects: &[ObjectType],
    rng: &mut dyn Rng,
    out: &mut Vec<PlacedObject>,
) {
    for (object_index, (object, placements)) in objects.iter().zip(candidates).enumerate() {
        for _ in 0..object.remaining() {
            if let Some(&placement) = pick(placements, rng) {
                out.push(PlacedObject {
                    object_index,
                    placement,
                });
            }
        }
    }
}

/// Draws one hidden layout. Types without a valid placement are left out.
pub fn sample_layout(
    size: GridSize,
    objects: &[ObjectType],
    opened: &OpenedCells,
    rng: &mut dyn Rng,
) -> Vec<PlacedObject> {
    let candidates = placements_per_type(size, objects, opened);
    let mut layout = Vec::new();
    draw(&candidates, objects, rng, &mut layout);
    layout
}

/// Estimates per-cell coverage by averaging `trials` sampled layouts.
pub fn estimate_coverage(
    size: GridSize,
    objects: &[ObjectType],
    opened: &OpenedCells,
    trials: usize,
    rng: &mut dyn Rng,
) -> ProbabilityGrid {
    let mut grid = ProbabilityGrid::new(size);
    if trials == 0 {
        return grid;
    }

    let candidates = placements_per_type(size, objects, opened);
    let mut hits = vec![0usize; size.cell_count()];
    let mut covered = vec![false; size.cell_count()];
    let mut layout = Vec::new();

    for _ in 0..trials {
        layout.clear();
        covered.fill(false);
        draw(&candidates, objects, rng, &mut layout);
        for placed in &layout {
            for cell in placed.placement.cells() {
                if let Some(i) = size.index(cell) {
                    covered[i] = true;
                }
            }
        }
        for (hit, &c) in hits.iter_mut().zip(&covered) {
            *hit += usize::from(c);
        }
    }

    for (value, &hit) in grid.values_mut().iter_mut().zip(&hits) {
        *value = hit as f64 / trials as f64;
    }
    grid
}
