//! ListOwnerGoalsHandler - Query handler for listing an owner's goals.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, OwnerId};
use crate::domain::goal::{Goal, GoalError};
use crate::ports::GoalStore;

use super::report;

/// Query to list every goal recorded against an owner.
#[derive(Debug, Clone)]
pub struct ListOwnerGoalsQuery {
    pub owner_id: OwnerId,
}

/// Handler for listing an owner's goals.
pub struct ListOwnerGoalsHandler {
    store: Arc<dyn GoalStore>,
}

impl ListOwnerGoalsHandler {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListOwnerGoalsQuery,
        metadata: CommandMetadata,
    ) -> Result<Vec<Goal>, GoalError> {
        self.store
            .find_by_owner(query.owner_id)
            .await
            .map_err(|e| report("list", &metadata, e.into()))
    }
}
