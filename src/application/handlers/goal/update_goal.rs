//! UpdateGoalHandler - Command handler for full-replace goal updates.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, GoalId};
use crate::domain::goal::{Goal, GoalError, GoalPayload};
use crate::ports::GoalStore;

use super::{load_owned_goal, report};

/// Command to replace the mutable fields of a goal.
#[derive(Debug, Clone)]
pub struct UpdateGoalCommand {
    pub goal_id: GoalId,
    pub payload: GoalPayload,
}

/// Handler for updating goals.
pub struct UpdateGoalHandler {
    store: Arc<dyn GoalStore>,
}

impl UpdateGoalHandler {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateGoalCommand,
        metadata: CommandMetadata,
    ) -> Result<Goal, GoalError> {
        // 1. Validate payload (pure, touches nothing)
        let details = cmd
            .payload
            .validate()
            .map_err(|e| report("update", &metadata, e.into()))?;

        // 2. Load, existence before ownership
        let mut goal = load_owned_goal(self.store.as_ref(), cmd.goal_id, "update", &metadata).await?;

        // 3. Full replace
        goal.replace_details(details);

        // 4. Persist against the version we read
        let updated = self
            .store
            .update(&goal)
            .await
            .map_err(|e| report("update", &metadata, GoalError::from_store(cmd.goal_id, e)))?;

        tracing::info!(
            goal_id = %updated.id(),
            owner_id = %metadata.owner_id,
            version = updated.version(),
            correlation_id = %metadata.correlation_id(),
            "Goal updated"
        );

        Ok(updated)
    }
}
