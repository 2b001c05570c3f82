//! HTTP handlers for goal endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::BearerCredential;
use crate::application::GoalLifecycleService;
use crate::domain::foundation::{CallerCredential, ErrorCode, GoalId};
use crate::domain::goal::{GoalError, GoalPayload};

use super::dto::{ErrorResponse, GoalListResponse, GoalResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GoalHandlers {
    service: Arc<GoalLifecycleService>,
    mask_forbidden: bool,
}

impl GoalHandlers {
    pub fn new(service: Arc<GoalLifecycleService>) -> Self {
        Self {
            service,
            mask_forbidden: false,
        }
    }

    /// Report another owner's goal as 404 rather than 403.
    pub fn with_forbidden_masked(mut self, mask: bool) -> Self {
        self.mask_forbidden = mask;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/goals - Create a goal owned by the caller
pub async fn create_goal(
    State(handlers): State<GoalHandlers>,
    BearerCredential(credential): BearerCredential,
    payload: Result<Json<GoalPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(rejection) => return handlers.reject_malformed(&credential, bad_body(rejection)).await,
    };

    match handlers.service.create_goal(&credential, payload).await {
        Ok(goal) => (StatusCode::CREATED, Json(GoalResponse::from(goal))).into_response(),
        Err(e) => handlers.error_response(e),
    }
}

/// GET /api/v1/goals - List the caller's goals
pub async fn list_goals(
    State(handlers): State<GoalHandlers>,
    BearerCredential(credential): BearerCredential,
) -> Response {
    match handlers.service.get_goals_by_owner(&credential).await {
        Ok(goals) => (StatusCode::OK, Json(GoalListResponse::from(goals))).into_response(),
        Err(e) => handlers.error_response(e),
    }
}

/// PUT /api/v1/goals/:id - Replace a goal's mutable fields
pub async fn update_goal(
    State(handlers): State<GoalHandlers>,
    BearerCredential(credential): BearerCredential,
    Path(goal_id): Path<String>,
    payload: Result<Json<GoalPayload>, JsonRejection>,
) -> Response {
    let goal_id = match parse_goal_id(&goal_id) {
        Ok(id) => id,
        Err(response) => return handlers.reject_malformed(&credential, response).await,
    };
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(rejection) => return handlers.reject_malformed(&credential, bad_body(rejection)).await,
    };

    match handlers.service.update_goal(&credential, goal_id, payload).await {
        Ok(goal) => (StatusCode::OK, Json(GoalResponse::from(goal))).into_response(),
        Err(e) => handlers.error_response(e),
    }
}

/// DELETE /api/v1/goals/:id - Delete a goal, returning its final state
pub async fn delete_goal(
    State(handlers): State<GoalHandlers>,
    BearerCredential(credential): BearerCredential,
    Path(goal_id): Path<String>,
) -> Response {
    let goal_id = match parse_goal_id(&goal_id) {
        Ok(id) => id,
        Err(response) => return handlers.reject_malformed(&credential, response).await,
    };

    match handlers.service.delete_goal(&credential, goal_id).await {
        Ok(goal) => (StatusCode::OK, Json(GoalResponse::from(goal))).into_response(),
        Err(e) => handlers.error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_goal_id(raw: &str) -> Result<GoalId, Response> {
    raw.parse::<GoalId>().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(ErrorCode::ValidationFailed, e.to_string())),
        )
            .into_response()
    })
}

fn bad_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(ErrorCode::ValidationFailed, rejection.body_text())),
    )
        .into_response()
}

impl GoalHandlers {
    /// A caller that does not resolve gets 401 even when its request is
    /// also malformed.
    async fn reject_malformed(&self, credential: &CallerCredential, malformed: Response) -> Response {
        match self.service.authenticate_caller(credential).await {
            Ok(_) => malformed,
            Err(e) => self.error_response(e),
        }
    }

    fn error_response(&self, error: GoalError) -> Response {
        let (status, body) = match &error {
            GoalError::Unauthenticated(_) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(error.code(), "Authentication required"),
            ),
            GoalError::InvalidInput { .. } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(error.code(), error.message()))
            }
            GoalError::NotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorResponse::new(error.code(), error.message()))
            }
            GoalError::Forbidden(id) if self.mask_forbidden => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    ErrorCode::GoalNotFound,
                    GoalError::not_found(*id).message(),
                ),
            ),
            GoalError::Forbidden(_) => {
                (StatusCode::FORBIDDEN, ErrorResponse::new(error.code(), error.message()))
            }
            GoalError::Conflict(_) => {
                (StatusCode::CONFLICT, ErrorResponse::new(error.code(), error.message()))
            }
            GoalError::StoreFailure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(error.code(), "Internal error"),
            ),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockIdentityResolver;
    use crate::adapters::storage::InMemoryGoalStore;
    use crate::domain::foundation::AuthError;

    fn handlers(mask: bool) -> GoalHandlers {
        let service = GoalLifecycleService::new(
            Arc::new(MockIdentityResolver::new()),
            Arc::new(InMemoryGoalStore::new()),
        );
        GoalHandlers::new(Arc::new(service)).with_forbidden_masked(mask)
    }

    #[test]
    fn status_mapping_covers_every_kind() {
        let h = handlers(false);
        let id = GoalId::new(1);
        let cases = [
            (GoalError::Unauthenticated(AuthError::InvalidToken), StatusCode::UNAUTHORIZED),
            (GoalError::invalid_input("title", "empty"), StatusCode::BAD_REQUEST),
            (GoalError::NotFound(id), StatusCode::NOT_FOUND),
            (GoalError::Forbidden(id), StatusCode::FORBIDDEN),
            (GoalError::Conflict(id), StatusCode::CONFLICT),
            (GoalError::store_failure("pool closed"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(h.error_response(error).status(), status);
        }
    }

    #[test]
    fn forbidden_masks_as_not_found_when_enabled() {
        let response = handlers(true).error_response(GoalError::Forbidden(GoalId::new(1)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_request_from_unknown_caller_is_unauthorized() {
        let h = handlers(false);
        let malformed = parse_goal_id("abc").unwrap_err();

        let response = h
            .reject_malformed(&CallerCredential::anonymous(), malformed)
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_request_from_known_caller_stays_bad_request() {
        let service = GoalLifecycleService::new(
            Arc::new(MockIdentityResolver::new().with_owner("t", 1)),
            Arc::new(InMemoryGoalStore::new()),
        );
        let h = GoalHandlers::new(Arc::new(service));
        let malformed = parse_goal_id("abc").unwrap_err();

        let response = h.reject_malformed(&CallerCredential::new("t"), malformed).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_goal_id_is_bad_request() {
        let response = parse_goal_id("abc").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_goal_id("12").unwrap(), GoalId::new(12));
    }
}
