//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types, and the ownership
//! vocabulary used across the goal domain.

mod auth;
mod authorization;
mod command;
mod errors;
mod ids;
mod ownership;
mod timestamp;

pub use auth::{AuthError, CallerCredential};
pub use authorization::AuthorizationGuard;
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{GoalId, OwnerId};
pub use ownership::OwnedBy;
pub use timestamp::Timestamp;
