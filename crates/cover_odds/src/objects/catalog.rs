//! Fixed scenario catalog.
//!
//! Each [`ScenarioId`] maps to the object types hidden in that round. The set is closed;
//! parsing an unknown identifier fails with [`Error::UnknownScenario`].
use std::fmt;
use std::str::FromStr;

use super::{ObjectSpec, ObjectType};
use crate::error::{Error, Result};

const CASE1: &[ObjectSpec] = &[
    ObjectSpec::new(3, 2, 2),
    ObjectSpec::new(3, 1, 5),
    ObjectSpec::new(2, 1, 2),
];

const CASE2: &[ObjectSpec] = &[
    ObjectSpec::new(4, 2, 1),
    ObjectSpec::new(1, 4, 2),
    ObjectSpec::new(3, 1, 5),
];

const CASE3: &[ObjectSpec] = &[
    ObjectSpec::new(3, 3, 1),
    ObjectSpec::new(2, 2, 4),
    ObjectSpec::new(2, 1, 3),
];

const CASE4: &[ObjectSpec] = &[
    ObjectSpec::new(4, 2, 2),
    ObjectSpec::new(3, 1, 3),
    ObjectSpec::new(2, 1, 6),
];

/// Identifier of a preset scenario.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScenarioId {
    #[default]
    Case1,
    Case2,
    Case3,
    Case4,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 4] = [
        ScenarioId::Case1,
        ScenarioId::Case2,
        ScenarioId::Case3,
        ScenarioId::Case4,
    ];

    /// Stable identifier, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioId::Case1 => "case1",
            ScenarioId::Case2 => "case2",
            ScenarioId::Case3 => "case3",
            ScenarioId::Case4 => "case4",
        }
    }

    /// Which rounds use this scenario.
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioId::Case1 => "rounds 1 and 4",
            ScenarioId::Case2 => "rounds 2 and 5",
            ScenarioId::Case3 => "rounds 3 and 6",
            ScenarioId::Case4 => "round 7 and later",
        }
    }

    pub fn objects(&self) -> &'static [ObjectSpec] {
        scenario(*self)
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownScenario {
                id: trimmed.to_owned(),
            })
    }
}

/// Object rows for a scenario, in catalog order.
pub fn scenario(id: ScenarioId) -> &'static [ObjectSpec] {
    match id {
        ScenarioId::Case1 => CASE1,
        ScenarioId::Case2 => CASE2,
        ScenarioId::Case3 => CASE3,
        ScenarioId::Case4 => CASE4,
    }
}

/// Fresh object types for a scenario with every instance still hidden.
pub fn scenario_objects(id: ScenarioId) -> Vec<ObjectType> {
    scenario(id).iter().copied().map(ObjectType::from).collect()
}
