//! In-memory implementation of GoalStore.
//!
//! Backs local runs without a database and the integration tests. Goals live
//! in a `BTreeMap` keyed by id, so owner listings come out in ascending id
//! order, matching the Postgres adapter.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, GoalId, OwnedBy, OwnerId};
use crate::domain::goal::{Goal, NewGoal};
use crate::ports::GoalStore;

struct Inner {
    goals: BTreeMap<GoalId, Goal>,
    next_id: i64,
}

/// Process-local goal store with version-checked writes.
pub struct InMemoryGoalStore {
    inner: RwLock<Inner>,
}

impl InMemoryGoalStore {
    /// Creates an empty store. The first inserted goal gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                goals: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of goals currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.goals.len()
    }

    /// Returns true if no goals are stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.goals.is_empty()
    }
}

impl Default for InMemoryGoalStore {
    fn default() -> Self {
        Self::new()
    }
}

fn stale(goal: &Goal, found: Option<u64>) -> DomainError {
    let err = DomainError::new(
        ErrorCode::Conflict,
        format!("Goal {} changed since version {}", goal.id(), goal.version()),
    )
    .with_detail("goal_id", goal.id().to_string())
    .with_detail("expected_version", goal.version().to_string());
    match found {
        Some(v) => err.with_detail("found_version", v.to_string()),
        None => err,
    }
}

#[async_trait]
impl GoalStore for InMemoryGoalStore {
    async fn find_by_id(&self, id: GoalId) -> Result<Option<Goal>, DomainError> {
        Ok(self.inner.read().await.goals.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Goal>, DomainError> {
        Ok(self
            .inner
            .read()
            .await
            .goals
            .values()
            .filter(|g| g.is_owned_by(owner_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, goal: &NewGoal) -> Result<Goal, DomainError> {
        let mut inner = self.inner.write().await;
        let id = GoalId::new(inner.next_id);
        inner.next_id += 1;

        let stored = goal.clone().into_goal(id);
        inner.goals.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, goal: &Goal) -> Result<Goal, DomainError> {
        let mut inner = self.inner.write().await;
        match inner.goals.get_mut(&goal.id()) {
            Some(current) if current.version() == goal.version() => {
                *current = goal.next_version();
                Ok(current.clone())
            }
            Some(current) => Err(stale(goal, Some(current.version()))),
            None => Err(stale(goal, None)),
        }
    }

    async fn delete(&self, goal: &Goal) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let found = inner.goals.get(&goal.id()).map(Goal::version);
        if found != Some(goal.version()) {
            return Err(stale(goal, found));
        }
        inner.goals.remove(&goal.id());
        Ok(())
    }
}
