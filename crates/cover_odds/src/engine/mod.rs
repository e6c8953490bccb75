//! Probability engine: marginal coverage probabilities under independent placement.
//!
//! For each object type with instances remaining, every valid placement across its
//! orientations is treated as equally likely. A cell's per-instance frequency `f` is the
//! share of placements covering it, the type's contribution is `1 - (1 - f)^remaining`, and
//! contributions from different types are combined as independent sources:
//! `acc = 1 - (1 - acc) * (1 - p)`. Opened cells are forced to exactly `0.0` afterwards.
//!
//! Instances are not constrained against each other (same or different types). This
//! slightly overestimates coverage when objects are numerous relative to the board, and
//! is the intended model.
use tracing::debug;

use crate::board::{GridSize, OpenedCells};
use crate::error::Result;
use crate::objects::ObjectType;

pub mod events;
pub mod grid;
pub mod placement;
pub mod sampling;

use events::{EngineEvent, EngineEventKind, EventSink, SkipReason};
use grid::ProbabilityGrid;
use placement::valid_placements;

/// Computes coverage probabilities on the standard 9x5 board.
pub fn compute_probabilities(objects: &[ObjectType], opened: &OpenedCells) -> ProbabilityGrid {
    ProbabilityEngine::default().compute(objects, opened)
}

/// Pure probability computation over a board of fixed size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbabilityEngine {
    size: GridSize,
}

impl ProbabilityEngine {
    pub fn new(size: GridSize) -> Self {
        debug_assert!(
            size.width > 0 && size.height > 0,
            "grid width and height must be > 0"
        );
        Self { size }
    }

    pub fn try_new(size: GridSize) -> Result<Self> {
        size.validate()?;
        Ok(Self { size })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Computes the probability grid for `objects` given the `opened` cells.
    pub fn compute(&self, objects: &[ObjectType], opened: &OpenedCells) -> ProbabilityGrid {
        self.compute_with_events(objects, opened, &mut ())
    }

    /// Like [`Self::compute`], reporting per-object outcomes to `sink`.
    pub fn compute_with_events(
        &self,
        objects: &[ObjectType],
        opened: &OpenedCells,
        sink: &mut dyn EventSink,
    ) -> ProbabilityGrid {
        let mut grid = ProbabilityGrid::new(self.size);
        let mut evaluated = 0;
        let mut skipped = 0;

        for (index, object) in objects.iter().enumerate() {
            match self.accumulate(&mut grid, object, opened) {
                Ok(placements) => {
                    evaluated += 1;
                    debug!(
                        "Object {} ({}x{}, {} remaining): {} valid placements.",
                        index,
                        object.width(),
                        object.height(),
                        object.remaining(),
                        placements
                    );
                    if sink.wants(EngineEventKind::ObjectEvaluated) {
                        sink.send(EngineEvent::ObjectEvaluated {
                            index,
                            object: *object,
                            placements,
                        });
                    }
                }
                Err(reason) => {
                    skipped += 1;
                    debug!(
                        "Object {} ({}x{}) contributes nothing: {:?}.",
                        index,
                        object.width(),
                        object.height(),
                        reason
                    );
                    if sink.wants(EngineEventKind::ObjectSkipped) {
                        sink.send(EngineEvent::ObjectSkipped {
                            index,
                            object: *object,
                            reason,
                        });
                    }
                }
            }
        }

        for cell in opened.iter() {
            grid.set(cell, 0.0);
        }

        if sink.wants(EngineEventKind::Finished) {
            sink.send(EngineEvent::Finished {
                evaluated,
                skipped,
                max_probability: grid.max(),
            });
        }

        grid
    }

    /// Folds one object type into `grid`, returning its valid placement count.
    fn accumulate(
        &self,
        grid: &mut ProbabilityGrid,
        object: &ObjectType,
        opened: &OpenedCells,
    ) -> std::result::Result<usize, SkipReason> {
        let remaining = object.remaining();
        if remaining == 0 {
            return Err(SkipReason::NoneRemaining);
        }

        let placements = valid_placements(self.size, object, opened);
        if placements.is_empty() {
            return Err(SkipReason::NoValidPlacement);
        }

        let mut cover = vec![0u32; self.size.cell_count()];
        for placement in &placements {
            for cell in placement.cells() {
                if let Some(i) = self.size.index(cell) {
                    cover[i] += 1;
                }
            }
        }

        let total = placements.len() as f64;
        let instances = i32::try_from(remaining).unwrap_or(i32::MAX);
        for (acc, &count) in grid.values_mut().iter_mut().zip(&cover) {
            if count == 0 {
                continue;
            }
            let f = count as f64 / total;
            let p = 1.0 - (1.0 - f).powi(instances);
            *acc = 1.0 - (1.0 - *acc) * (1.0 - p);
        }

        Ok(placements.len())
    }
}
