//! Caller-side state driving recomputation.
//!
//! A [`Session`] holds what a front end tracks between clicks: the active scenario, how
//! many instances of each object type have been found, and which cells are opened.
//! [`Session::evaluate`] recomputes probabilities and ranking from scratch every time.
use tracing::{debug, warn};

use crate::board::{Cell, OpenedCells};
use crate::engine::grid::ProbabilityGrid;
use crate::engine::ProbabilityEngine;
use crate::error::{Error, Result};
use crate::objects::catalog::{scenario, ScenarioId};
use crate::objects::ObjectType;
use crate::ranking::{rank_cells_with, RankConfig, Ranking};

/// Probabilities and highlight tiers for one session state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub probabilities: ProbabilityGrid,
    pub ranking: Ranking,
}

#[derive(Clone, Debug)]
pub struct Session {
    scenario: ScenarioId,
    found: Vec<u32>,
    opened: OpenedCells,
    engine: ProbabilityEngine,
    rank_config: RankConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ScenarioId::default())
    }
}

impl Session {
    /// Starts a session on the standard board with nothing found or opened.
    pub fn new(id: ScenarioId) -> Self {
        Self {
            scenario: id,
            found: vec![0; scenario(id).len()],
            opened: OpenedCells::new(),
            engine: ProbabilityEngine::default(),
            rank_config: RankConfig::default(),
        }
    }

    /// Sets the ranking configuration used by [`Self::evaluate`].
    pub fn with_rank_config(mut self, config: RankConfig) -> Self {
        self.rank_config = config;
        self
    }

    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    pub fn opened(&self) -> &OpenedCells {
        &self.opened
    }

    pub fn found_counts(&self) -> &[u32] {
        &self.found
    }

    /// Switches scenario, resetting found counts and clearing opened cells.
    pub fn select_scenario(&mut self, id: ScenarioId) {
        debug!("Switching scenario {} -> {}.", self.scenario, id);
        self.scenario = id;
        self.found = vec![0; scenario(id).len()];
        self.opened.clear();
    }

    /// Records how many instances of object `index` were found, clamped to
    /// `[0, total_count]`. Returns the stored count.
    pub fn set_found(&mut self, index: usize, found: i64) -> Result<u32> {
        let specs = scenario(self.scenario);
        let Some(spec) = specs.get(index) else {
            warn!(
                "Object index {} out of range for scenario {}.",
                index, self.scenario
            );
            return Err(Error::ObjectIndexOutOfRange {
                index,
                len: specs.len(),
            });
        };

        let clamped = found.clamp(0, spec.total_count as i64) as u32;
        if clamped as i64 != found {
            debug!(
                "Found count {} for object {} clamped to {}.",
                found, index, clamped
            );
        }
        self.found[index] = clamped;
        Ok(clamped)
    }

    /// Toggles a cell between opened and closed, returning `true` if it is now opened.
    pub fn toggle_cell(&mut self, cell: Cell) -> Result<bool> {
        let cell = self.engine.size().check(cell).inspect_err(|_| {
            warn!("Ignoring toggle of out-of-bounds cell {}.", cell);
        })?;
        Ok(self.opened.toggle(cell))
    }

    /// Active object types with remaining counts derived from found counts.
    pub fn objects(&self) -> Vec<ObjectType> {
        scenario(self.scenario)
            .iter()
            .zip(&self.found)
            .map(|(spec, &found)| ObjectType::from(*spec).with_found(found as i64))
            .collect()
    }

    pub fn probabilities(&self) -> ProbabilityGrid {
        self.engine.compute(&self.objects(), &self.opened)
    }

    /// Recomputes probabilities and ranking for the current state.
    pub fn evaluate(&self) -> Evaluation {
        let probabilities = self.probabilities();
        let ranking = rank_cells_with(&probabilities, &self.opened, &self.rank_config);
        Evaluation {
            probabilities,
            ranking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_probabilities;
    use crate::objects::catalog::scenario_objects;

    #[test]
    fn new_session_starts_fully_hidden() {
        let session = Session::new(ScenarioId::Case2);
        assert_eq!(session.objects(), scenario_objects(ScenarioId::Case2));
        assert!(session.opened().is_empty());
        assert_eq!(session.found_counts(), &[0, 0, 0]);
    }

    #[test]
    fn set_found_clamps_and_derives_remaining() {
        let mut session = Session::new(ScenarioId::Case1);
        assert_eq!(session.set_found(1, 3).unwrap(), 3);
        assert_eq!(session.set_found(0, 9).unwrap(), 2);
        assert_eq!(session.set_found(2, -4).unwrap(), 0);

        let remaining: Vec<_> = session.objects().iter().map(|o| o.remaining()).collect();
        assert_eq!(remaining, vec![0, 2, 2]);
    }

    #[test]
    fn set_found_rejects_unknown_index() {
        let mut session = Session::new(ScenarioId::Case1);
        assert!(matches!(
            session.set_found(3, 1),
            Err(Error::ObjectIndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn toggle_cell_is_a_set_toggle() {
        let mut session = Session::default();
        let cell = Cell::new(4, 2);
        assert!(session.toggle_cell(cell).unwrap());
        assert!(session.opened().contains(cell));
        assert!(!session.toggle_cell(cell).unwrap());
        assert!(session.opened().is_empty());
        assert!(session.toggle_cell(Cell::new(9, 0)).is_err());
    }

    #[test]
    fn select_scenario_resets_state() {
        let mut session = Session::new(ScenarioId::Case1);
        session.set_found(0, 1).unwrap();
        session.toggle_cell(Cell::new(0, 0)).unwrap();

        session.select_scenario(ScenarioId::Case3);
        assert_eq!(session.scenario(), ScenarioId::Case3);
        assert!(session.opened().is_empty());
        assert_eq!(session.objects(), scenario_objects(ScenarioId::Case3));
    }

    #[test]
    fn evaluate_matches_direct_engine_call() {
        let mut session = Session::new(ScenarioId::Case4);
        session.set_found(2, 2).unwrap();
        session.toggle_cell(Cell::new(4, 2)).unwrap();
        session.toggle_cell(Cell::new(3, 2)).unwrap();

        let evaluation = session.evaluate();
        let direct = compute_probabilities(&session.objects(), session.opened());
        assert_eq!(evaluation.probabilities, direct);
        assert_eq!(evaluation.probabilities.get(Cell::new(4, 2)), 0.0);
        assert!(!evaluation.ranking.top.is_empty());
        assert!(evaluation
            .ranking
            .top
            .iter()
            .all(|c| !session.opened().contains(*c)));
    }

    #[test]
    fn rank_config_is_applied() {
        let session =
            Session::new(ScenarioId::Case1).with_rank_config(RankConfig::new().with_second_tier_cap(5));
        let evaluation = session.evaluate();
        assert_eq!(evaluation.ranking.second.len(), 5);
    }
}
