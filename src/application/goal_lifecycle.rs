//! GoalLifecycleService - the single entry point for goal operations.
//!
//! Every operation resolves the caller credential first. A resolution
//! failure returns `Unauthenticated` before the store is touched. The
//! resolved owner then flows into the handlers through `CommandMetadata`.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::foundation::{CallerCredential, CommandMetadata, GoalId, OwnerId};
use crate::domain::goal::{Goal, GoalError, GoalPayload};
use crate::ports::{GoalStore, IdentityResolver};

use super::handlers::goal::{
    CreateGoalCommand, CreateGoalHandler, DeleteGoalCommand, DeleteGoalHandler,
    ListOwnerGoalsHandler, ListOwnerGoalsQuery, UpdateGoalCommand, UpdateGoalHandler,
};

/// Orchestrates identity resolution, ownership checks and goal persistence.
///
/// Holds no state besides its collaborators, so one instance can be shared
/// across any number of concurrent requests.
pub struct GoalLifecycleService {
    resolver: Arc<dyn IdentityResolver>,
    create: CreateGoalHandler,
    list: ListOwnerGoalsHandler,
    update: UpdateGoalHandler,
    delete: DeleteGoalHandler,
}

impl GoalLifecycleService {
    pub fn new(resolver: Arc<dyn IdentityResolver>, store: Arc<dyn GoalStore>) -> Self {
        Self {
            resolver,
            create: CreateGoalHandler::new(store.clone()),
            list: ListOwnerGoalsHandler::new(store.clone()),
            update: UpdateGoalHandler::new(store.clone()),
            delete: DeleteGoalHandler::new(store),
        }
    }

    /// Creates a goal owned by the caller. Owner fields in the payload are ignored.
    pub async fn create_goal(
        &self,
        caller: &CallerCredential,
        payload: GoalPayload,
    ) -> Result<Goal, GoalError> {
        let metadata = self.authenticate(caller, "create").await?;
        self.create.handle(CreateGoalCommand { payload }, metadata).await
    }

    /// Returns every goal the caller owns, possibly none.
    pub async fn get_goals_by_owner(&self, caller: &CallerCredential) -> Result<Vec<Goal>, GoalError> {
        let metadata = self.authenticate(caller, "list").await?;
        let query = ListOwnerGoalsQuery {
            owner_id: metadata.owner_id,
        };
        self.list.handle(query, metadata).await
    }

    /// Replaces every mutable field of a goal the caller owns.
    pub async fn update_goal(
        &self,
        caller: &CallerCredential,
        goal_id: GoalId,
        payload: GoalPayload,
    ) -> Result<Goal, GoalError> {
        let metadata = self.authenticate(caller, "update").await?;
        self.update
            .handle(UpdateGoalCommand { goal_id, payload }, metadata)
            .await
    }

    /// Deletes a goal the caller owns and returns its final state.
    pub async fn delete_goal(
        &self,
        caller: &CallerCredential,
        goal_id: GoalId,
    ) -> Result<Goal, GoalError> {
        let metadata = self.authenticate(caller, "delete").await?;
        self.delete
            .handle(DeleteGoalCommand { goal_id }, metadata)
            .await
    }

    /// Creates a goal on behalf of an owner that was already resolved
    /// out of band, such as a fixture loader.
    pub async fn create_goal_for(
        &self,
        owner_id: OwnerId,
        payload: GoalPayload,
        source: &str,
    ) -> Result<Goal, GoalError> {
        let metadata = request_metadata(owner_id, source);
        self.create.handle(CreateGoalCommand { payload }, metadata).await
    }

    /// Resolves the caller and nothing else.
    ///
    /// Transports use this to rank a credential failure above a malformed
    /// request.
    pub async fn authenticate_caller(&self, caller: &CallerCredential) -> Result<OwnerId, GoalError> {
        self.authenticate(caller, "authenticate")
            .await
            .map(|metadata| metadata.owner_id)
    }

    async fn authenticate(
        &self,
        caller: &CallerCredential,
        operation: &'static str,
    ) -> Result<CommandMetadata, GoalError> {
        match self.resolver.resolve(caller).await {
            Ok(owner_id) => Ok(request_metadata(owner_id, "api")),
            Err(err) => {
                tracing::debug!(operation, error = %err, "Caller credential rejected");
                Err(GoalError::Unauthenticated(err))
            }
        }
    }
}

/// Metadata for one request. The correlation id is fixed here so every
/// log line the request produces carries the same value.
fn request_metadata(owner_id: OwnerId, source: &str) -> CommandMetadata {
    CommandMetadata::new(owner_id)
        .with_source(source)
        .with_correlation_id(Uuid::new_v4().to_string())
}
