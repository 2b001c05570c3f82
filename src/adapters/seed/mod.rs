//! Startup fixture loaders.
//!
//! Each `seed.*` configuration key maps to exactly one loader function;
//! `run_seed` is that mapping.

mod goal_fixtures;

pub use goal_fixtures::load_goal_fixtures;

use thiserror::Error;

use crate::application::GoalLifecycleService;
use crate::config::SeedConfig;
use crate::domain::goal::GoalError;

/// Errors raised while loading fixtures.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read fixture file {0}")]
    Io(String),

    #[error("Failed to parse fixtures: {0}")]
    Parse(String),

    #[error("Fixture {index} has invalid owner_id {owner_id}")]
    InvalidOwner { index: usize, owner_id: i64 },

    #[error("Fixture {index} was rejected: {source}")]
    Rejected {
        index: usize,
        #[source]
        source: GoalError,
    },
}

/// Runs every loader whose configuration key is set.
///
/// Returns the total number of records created.
pub async fn run_seed(config: &SeedConfig, service: &GoalLifecycleService) -> Result<usize, SeedError> {
    let mut created = 0;
    if let Some(path) = config.goals_file() {
        created += load_goal_fixtures(path, service).await?;
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockIdentityResolver;
    use crate::adapters::storage::InMemoryGoalStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn nothing_configured_loads_nothing() {
        let service = GoalLifecycleService::new(
            Arc::new(MockIdentityResolver::new()),
            Arc::new(InMemoryGoalStore::new()),
        );

        assert_eq!(run_seed(&SeedConfig::default(), &service).await.unwrap(), 0);
    }
}
