//! Goal cadence labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How often a goal recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalInterval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl GoalInterval {
    /// Returns the canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalInterval::Daily => "daily",
            GoalInterval::Weekly => "weekly",
            GoalInterval::Monthly => "monthly",
            GoalInterval::Yearly => "yearly",
        }
    }
}

impl fmt::Display for GoalInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalInterval {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(GoalInterval::Daily),
            "weekly" => Ok(GoalInterval::Weekly),
            "monthly" => Ok(GoalInterval::Monthly),
            "yearly" => Ok(GoalInterval::Yearly),
            other => Err(ValidationError::invalid_format(
                "interval",
                format!("unknown interval '{}'", other),
            )),
        }
    }
}
