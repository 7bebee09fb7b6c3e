//! Strongly-typed identifiers for domain entities
//!
//! Match identifiers are assigned by the store (a PostgreSQL `SERIAL`), so the
//! newtype wraps an `i32` rather than generating values itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Identifier of a tracked match
///
/// Values only ever come from the store or from parsing caller input; there
/// is deliberately no constructor that invents a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(i32);

impl MatchId {
    /// Wraps a raw store-assigned identifier
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier as stored in the database
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| CoreError::invalid_id(s))
    }
}

impl From<i32> for MatchId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<MatchId> for i32 {
    fn from(id: MatchId) -> i32 {
        id.0
    }
}
