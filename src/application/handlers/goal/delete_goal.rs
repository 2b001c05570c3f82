//! DeleteGoalHandler - Command handler for deleting goals.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, GoalId};
use crate::domain::goal::{Goal, GoalError};
use crate::ports::GoalStore;

use super::{load_owned_goal, report};

/// Command to delete a goal.
#[derive(Debug, Clone)]
pub struct DeleteGoalCommand {
    pub goal_id: GoalId,
}

/// Handler for deleting goals.
///
/// Returns the last state the goal had before removal.
pub struct DeleteGoalHandler {
    store: Arc<dyn GoalStore>,
}

impl DeleteGoalHandler {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: DeleteGoalCommand,
        metadata: CommandMetadata,
    ) -> Result<Goal, GoalError> {
        let goal = load_owned_goal(self.store.as_ref(), cmd.goal_id, "delete", &metadata).await?;

        self.store
            .delete(&goal)
            .await
            .map_err(|e| report("delete", &metadata, GoalError::from_store(cmd.goal_id, e)))?;

        tracing::info!(
            goal_id = %goal.id(),
            owner_id = %metadata.owner_id,
            correlation_id = %metadata.correlation_id(),
            "Goal deleted"
        );

        Ok(goal)
    }
}
