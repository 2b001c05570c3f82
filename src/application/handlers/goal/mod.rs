//! Goal command and query handlers.
//!
//! Mutating handlers on an existing goal go through `load_owned_goal`, which
//! checks existence strictly before ownership and does both before any write.

mod create_goal;
mod delete_goal;
mod list_owner_goals;
mod update_goal;

pub use create_goal::{CreateGoalCommand, CreateGoalHandler};
pub use delete_goal::{DeleteGoalCommand, DeleteGoalHandler};
pub use list_owner_goals::{ListOwnerGoalsHandler, ListOwnerGoalsQuery};
pub use update_goal::{UpdateGoalCommand, UpdateGoalHandler};

use crate::domain::foundation::{AuthorizationGuard, CommandMetadata, GoalId};
use crate::domain::goal::{Goal, GoalError};
use crate::ports::GoalStore;

/// Loads `goal_id` and confirms the caller in `metadata` owns it.
///
/// - absent goal: `NotFound`
/// - present but owned by someone else: `Forbidden`
async fn load_owned_goal(
    store: &dyn GoalStore,
    goal_id: GoalId,
    operation: &'static str,
    metadata: &CommandMetadata,
) -> Result<Goal, GoalError> {
    let goal = store
        .find_by_id(goal_id)
        .await
        .map_err(|e| report(operation, metadata, GoalError::from_store(goal_id, e)))?
        .ok_or_else(|| report(operation, metadata, GoalError::not_found(goal_id)))?;

    let owns = AuthorizationGuard::is_owner(metadata.owner_id, Some(&goal))
        .map_err(|e| report(operation, metadata, e.into()))?;
    if !owns {
        return Err(report(operation, metadata, GoalError::forbidden(goal_id)));
    }

    Ok(goal)
}

/// Logs a failure at the level its kind warrants and hands it back.
fn report(operation: &'static str, metadata: &CommandMetadata, err: GoalError) -> GoalError {
    let owner_id = metadata.owner_id;
    let correlation_id = metadata.correlation_id();
    match &err {
        GoalError::Forbidden(goal_id) => tracing::warn!(
            operation,
            %owner_id,
            %goal_id,
            %correlation_id,
            "Ownership check denied goal access"
        ),
        GoalError::Conflict(goal_id) => tracing::warn!(
            operation,
            %owner_id,
            %goal_id,
            %correlation_id,
            "Goal version changed before write"
        ),
        GoalError::NotFound(goal_id) => tracing::debug!(
            operation,
            %owner_id,
            %goal_id,
            %correlation_id,
            "Goal not found"
        ),
        GoalError::InvalidInput { field, message } => tracing::debug!(
            operation,
            %owner_id,
            field = %field,
            %correlation_id,
            "Rejected goal payload: {}",
            message
        ),
        GoalError::StoreFailure(cause) => tracing::error!(
            operation,
            %owner_id,
            %correlation_id,
            error = %cause,
            "Goal store failure"
        ),
        GoalError::Unauthenticated(_) => {}
    }
    err
}
