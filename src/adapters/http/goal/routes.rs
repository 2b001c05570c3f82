//! HTTP routes for goal endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{create_goal, delete_goal, list_goals, update_goal, GoalHandlers};

/// Creates the goal router. Mounted under `/api/v1/goals`.
pub fn goal_routes(handlers: GoalHandlers) -> Router {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route("/:id", put(update_goal).delete(delete_goal))
        .with_state(handlers)
}
