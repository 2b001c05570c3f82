//! Goal store port.
//!
//! Defines the contract for persisting and retrieving Goal aggregates.
//!
//! # Design
//!
//! - **Owner-scoped listing**: `find_by_owner` filters in the store, never in memory upstream
//! - **Version-checked writes**: `update` and `delete` compare the version read
//!   earlier and fail with `Conflict` if the stored row moved on or vanished

use crate::domain::foundation::{DomainError, GoalId, OwnerId};
use crate::domain::goal::{Goal, NewGoal};
use async_trait::async_trait;

/// Repository port for Goal aggregate persistence.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Find a goal by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: GoalId) -> Result<Option<Goal>, DomainError>;

    /// Find all goals recorded against an owner, ordered by id ascending.
    ///
    /// An owner with no goals yields an empty vector.
    async fn find_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Goal>, DomainError>;

    /// Insert a new goal, assigning a fresh id and the initial version.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, goal: &NewGoal) -> Result<Goal, DomainError>;

    /// Replace the stored goal if its version still equals `goal.version()`.
    ///
    /// Returns the stored state with the version incremented.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the stored version differs or the goal is gone
    /// - `DatabaseError` on persistence failure
    async fn update(&self, goal: &Goal) -> Result<Goal, DomainError>;

    /// Remove the goal if its version still equals `goal.version()`.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the stored version differs or the goal is gone
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, goal: &Goal) -> Result<(), DomainError>;
}
