#![forbid(unsafe_code)]
//! cover_odds: Coverage probabilities for hidden rectangular objects on a small grid.
//!
//! Modules:
//! - board: grid dimensions, cell addressing, and the opened (known-empty) cell set
//! - objects: object types, orientations, and the fixed scenario catalog
//! - engine: placement enumeration, probability computation, events, and Monte Carlo sampling
//! - ranking: top and second tier cell selection from a probability grid
//! - session: caller-side state (scenario, found counts, opened cells) driving recomputation
pub mod board;
pub mod engine;
pub mod error;
pub mod objects;
pub mod ranking;
pub mod session;

/// Convenient re-exports for common types. Import with `use cover_odds::prelude::*;`.
pub mod prelude {
    pub use crate::board::{Cell, GridSize, OpenedCells, GRID_HEIGHT, GRID_WIDTH};
    pub use crate::engine::events::{
        EngineEvent, EngineEventKind, EventSink, FnSink, SkipReason, VecSink,
    };
    pub use crate::engine::grid::ProbabilityGrid;
    pub use crate::engine::placement::{valid_placements, Placement};
    pub use crate::engine::sampling::{estimate_coverage, sample_layout, PlacedObject};
    pub use crate::engine::{compute_probabilities, ProbabilityEngine};
    pub use crate::error::{Error, Result};
    pub use crate::objects::catalog::{scenario, scenario_objects, ScenarioId};
    pub use crate::objects::{ObjectSpec, ObjectType, Orientation};
    pub use crate::ranking::{
        rank_cells, rank_cells_with, RankConfig, Ranking, Tier, DEFAULT_SECOND_TIER_CAP,
    };
    pub use crate::session::{Evaluation, Session};
}
