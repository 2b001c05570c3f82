//! HTTP DTOs for goal endpoints.
//!
//! Requests deserialize straight into `GoalPayload`; responses are defined
//! here so the wire shape can evolve apart from the aggregate.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::foundation::OwnedBy;
use crate::domain::goal::{CompletionState, Goal, GoalInterval};

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A goal as returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub interval: Option<GoalInterval>,
    pub due_date: Option<String>,
    pub task_unit_count: u32,
    pub pledge_amount: Option<Decimal>,
    pub label_color: String,
    pub completion_state: CompletionState,
    pub version: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        let details = goal.details();
        Self {
            id: goal.id().as_i64(),
            owner_id: goal.owner_id().as_i64(),
            title: details.title().to_string(),
            description: details.description().to_string(),
            interval: details.interval(),
            due_date: details.due_date().map(|d| d.to_rfc3339()),
            task_unit_count: details.task_unit_count(),
            pledge_amount: details.pledge_amount(),
            label_color: details.label_color().to_string(),
            completion_state: details.completion_state(),
            version: goal.version(),
            created_at: goal.created_at().to_rfc3339(),
            updated_at: goal.updated_at().to_rfc3339(),
        }
    }
}

/// All goals of the caller.
#[derive(Debug, Clone, Serialize)]
pub struct GoalListResponse {
    pub items: Vec<GoalResponse>,
    pub total: usize,
}

impl From<Vec<Goal>> for GoalListResponse {
    fn from(goals: Vec<Goal>) -> Self {
        let items: Vec<GoalResponse> = goals.into_iter().map(Into::into).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}
