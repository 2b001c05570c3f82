use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Progress marker on a goal. Changes only through an explicit update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    #[default]
    NotStarted,
    InProgress,
    Complete,
}

impl CompletionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionState::NotStarted => "not_started",
            CompletionState::InProgress => "in_progress",
            CompletionState::Complete => "complete",
        }
    }
}

impl fmt::Display for CompletionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompletionState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(CompletionState::NotStarted),
            "in_progress" => Ok(CompletionState::InProgress),
            "complete" => Ok(CompletionState::Complete),
            other => Err(ValidationError::invalid_format(
                "completion_state",
                format!("unknown state '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_not_started() {
        assert_eq!(CompletionState::default(), CompletionState::NotStarted);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&CompletionState::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn parses_stored_representation() {
        assert_eq!("complete".parse::<CompletionState>().unwrap(), CompletionState::Complete);
        assert!("done".parse::<CompletionState>().is_err());
    }
}
