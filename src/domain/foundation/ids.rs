//! Strongly-typed identifier value objects.
//!
//! Both identifiers are positive 64-bit integers. Goal ids are assigned by
//! the goal store on insert; owner ids come from the identity resolver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Unique identifier for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(i64);

impl GoalId {
    /// Creates a GoalId from a raw store value.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the inner integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GoalId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_positive("goal_id", s).map(Self)
    }
}

/// Stable numeric identifier of the identity that owns goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(i64);

impl OwnerId {
    /// Creates an OwnerId, rejecting zero and negative values.
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::invalid_format(
                "owner_id",
                "must be a positive integer",
            ));
        }
        Ok(Self(raw))
    }

    /// Returns the inner integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OwnerId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_positive("owner_id", s).map(Self)
    }
}

fn parse_positive(field: &'static str, s: &str) -> Result<i64, ValidationError> {
    let raw: i64 = s
        .trim()
        .parse()
        .map_err(|_| ValidationError::invalid_format(field, "not an integer"))?;
    if raw <= 0 {
        return Err(ValidationError::invalid_format(
            field,
            "must be a positive integer",
        ));
    }
    Ok(raw)
}
