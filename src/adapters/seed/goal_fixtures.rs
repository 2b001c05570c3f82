//! YAML goal fixtures.
//!
//! ```yaml
//! - owner_id: 1
//!   goal:
//!     title: Run 5k
//!     interval: weekly
//!     taskUnitCount: 0
//! ```
//!
//! Each entry goes through the regular create path, so the owner comes from
//! `owner_id` and any owner field inside `goal` is dropped like it would be
//! for an API caller.

use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::application::GoalLifecycleService;
use crate::domain::foundation::OwnerId;
use crate::domain::goal::GoalPayload;

use super::SeedError;

#[derive(Debug, Deserialize)]
struct GoalFixture {
    owner_id: i64,
    goal: GoalPayload,
}

/// Creates every goal listed in the YAML file at `path`.
///
/// Stops at the first entry that fails and reports its position.
/// Returns how many goals were created.
pub async fn load_goal_fixtures(
    path: &Path,
    service: &GoalLifecycleService,
) -> Result<usize, SeedError> {
    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| SeedError::Io(format!("{}: {}", path.display(), e)))?;

    let fixtures: Vec<GoalFixture> =
        serde_yaml::from_str(&yaml).map_err(|e| SeedError::Parse(e.to_string()))?;

    for (index, fixture) in fixtures.iter().enumerate() {
        let owner = OwnerId::new(fixture.owner_id).map_err(|_| SeedError::InvalidOwner {
            index,
            owner_id: fixture.owner_id,
        })?;

        let goal = service
            .create_goal_for(owner, fixture.goal.clone(), "seed")
            .await
            .map_err(|source| SeedError::Rejected { index, source })?;

        tracing::debug!(goal_id = %goal.id(), owner_id = %owner, "Seeded goal");
    }

    tracing::info!(count = fixtures.len(), path = %path.display(), "Goal fixtures loaded");
    Ok(fixtures.len())
}
