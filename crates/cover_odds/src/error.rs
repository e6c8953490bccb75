//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. The
//! probability engine and ranking never fail; errors only arise at the boundaries where
//! callers supply configuration, scenario identifiers, object indices, or cells.
use thiserror::Error;

use crate::board::Cell;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown scenario '{id}'")]
    UnknownScenario { id: String },

    #[error("object index {index} out of range (scenario has {len} object types)")]
    ObjectIndexOutOfRange { index: usize, len: usize },

    #[error("cell ({}, {}) is outside the {width}x{height} grid", .cell.x, .cell.y)]
    CellOutOfBounds { cell: Cell, width: u32, height: u32 },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
