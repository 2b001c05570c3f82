//! Goal-specific error types.

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, GoalId, ValidationError};

/// Failures surfaced by goal lifecycle operations.
///
/// `NotFound` and `Forbidden` are always kept apart here; whether a
/// transport blurs them is the transport's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    /// The caller credential did not resolve to an owner.
    Unauthenticated(AuthError),
    /// The payload or an argument was missing or out of range.
    InvalidInput { field: String, message: String },
    /// No goal with this id exists.
    NotFound(GoalId),
    /// The goal exists but belongs to someone else.
    Forbidden(GoalId),
    /// The goal changed or vanished between read and write.
    Conflict(GoalId),
    /// The store failed; the cause is opaque to callers.
    StoreFailure(String),
}

impl GoalError {
    pub fn unauthenticated(err: AuthError) -> Self {
        GoalError::Unauthenticated(err)
    }
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        GoalError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn not_found(id: GoalId) -> Self {
        GoalError::NotFound(id)
    }
    pub fn forbidden(id: GoalId) -> Self {
        GoalError::Forbidden(id)
    }
    pub fn conflict(id: GoalId) -> Self {
        GoalError::Conflict(id)
    }
    pub fn store_failure(message: impl Into<String>) -> Self {
        GoalError::StoreFailure(message.into())
    }

    /// Maps a store error raised while handling `goal_id`.
    ///
    /// A version mismatch becomes `Conflict` on that goal; everything else
    /// goes through the generic conversion.
    pub fn from_store(goal_id: GoalId, err: DomainError) -> Self {
        match err.code {
            ErrorCode::Conflict => GoalError::Conflict(goal_id),
            ErrorCode::GoalNotFound => GoalError::NotFound(goal_id),
            _ => err.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GoalError::Unauthenticated(_) => ErrorCode::Unauthorized,
            GoalError::InvalidInput { .. } => ErrorCode::ValidationFailed,
            GoalError::NotFound(_) => ErrorCode::GoalNotFound,
            GoalError::Forbidden(_) => ErrorCode::Forbidden,
            GoalError::Conflict(_) => ErrorCode::Conflict,
            GoalError::StoreFailure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            GoalError::Unauthenticated(err) => format!("Authentication required: {}", err),
            GoalError::InvalidInput { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            GoalError::NotFound(id) => format!("Goal not found: {}", id),
            GoalError::Forbidden(id) => format!("Not permitted to modify goal {}", id),
            GoalError::Conflict(id) => {
                format!("Goal {} was modified concurrently; reload and retry", id)
            }
            GoalError::StoreFailure(msg) => format!("Store failure: {}", msg),
        }
    }

    /// Returns true for outcomes the caller caused (4xx-style).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, GoalError::StoreFailure(_))
    }
}

impl std::fmt::Display for GoalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for GoalError {}

impl From<AuthError> for GoalError {
    fn from(err: AuthError) -> Self {
        GoalError::Unauthenticated(err)
    }
}

impl From<ValidationError> for GoalError {
    fn from(err: ValidationError) -> Self {
        GoalError::InvalidInput {
            field: err.field().to_string(),
            message: err.reason(),
        }
    }
}

impl From<DomainError> for GoalError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::InvalidArgument => GoalError::InvalidInput {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            ErrorCode::Unauthorized => GoalError::Unauthenticated(AuthError::InvalidToken),
            _ => GoalError::StoreFailure(err.message),
        }
    }
}
