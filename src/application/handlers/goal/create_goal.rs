//! CreateGoalHandler - Command handler for creating goals.

use std::sync::Arc;

use super::report;
use crate::domain::foundation::CommandMetadata;
use crate::domain::goal::{Goal, GoalError, GoalPayload, NewGoal};
use crate::ports::GoalStore;

/// Command to create a goal for the caller in the metadata.
#[derive(Debug, Clone)]
pub struct CreateGoalCommand {
    pub payload: GoalPayload,
}

/// Handler for creating goals.
pub struct CreateGoalHandler {
    store: Arc<dyn GoalStore>,
}

impl CreateGoalHandler {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CreateGoalCommand,
        metadata: CommandMetadata,
    ) -> Result<Goal, GoalError> {
        // 1. Validate payload
        let details = cmd
            .payload
            .validate()
            .map_err(|e| report("create", &metadata, e.into()))?;

        // 2. Owner comes from the resolved caller only
        let new_goal = NewGoal::new(metadata.owner_id, details);

        // 3. Persist
        let goal = self
            .store
            .insert(&new_goal)
            .await
            .map_err(|e| report("create", &metadata, e.into()))?;

        tracing::info!(
            goal_id = %goal.id(),
            owner_id = %metadata.owner_id,
            correlation_id = %metadata.correlation_id(),
            source = metadata.source(),
            "Goal created"
        );

        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::goal::test_support::{owner, MockGoalStore};
    use crate::domain::foundation::{GoalId, OwnedBy};

    fn handler(store: Arc<MockGoalStore>) -> CreateGoalHandler {
        CreateGoalHandler::new(store)
    }

    #[tokio::test]
    async fn creates_goal_owned_by_caller() {
        let store = Arc::new(MockGoalStore::new());
        let cmd = CreateGoalCommand {
            payload: GoalPayload {
                interval: Some("weekly".to_string()),
                task_unit_count: Some(0),
                ..GoalPayload::titled("Run 5k")
            },
        };

        let goal = handler(store.clone())
            .handle(cmd, CommandMetadata::new(owner(1)))
            .await
            .unwrap();

        assert_eq!(goal.id(), GoalId::new(1));
        assert_eq!(goal.owner_id(), owner(1));
        assert_eq!(goal.details().title(), "Run 5k");
        assert!(store.get(goal.id()).is_some());
    }

    #[tokio::test]
    async fn owner_field_in_payload_json_is_ignored() {
        let store = Arc::new(MockGoalStore::new());
        let payload: GoalPayload =
            serde_json::from_str(r#"{"title":"Swim","ownerId":77}"#).unwrap();

        let goal = handler(store)
            .handle(CreateGoalCommand { payload }, CommandMetadata::new(owner(3)))
            .await
            .unwrap();

        assert_eq!(goal.owner_id(), owner(3));
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_store() {
        let store = Arc::new(MockGoalStore::new());
        let cmd = CreateGoalCommand {
            payload: GoalPayload::default(),
        };

        let result = handler(store.clone())
            .handle(cmd, CommandMetadata::new(owner(1)))
            .await;

        assert!(matches!(result, Err(GoalError::InvalidInput { .. })));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let store = Arc::new(MockGoalStore::failing_writes());
        let cmd = CreateGoalCommand {
            payload: GoalPayload::titled("Run"),
        };

        let result = handler(store).handle(cmd, CommandMetadata::new(owner(1))).await;

        assert!(matches!(result, Err(GoalError::StoreFailure(_))));
    }
}
