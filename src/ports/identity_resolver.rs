//! Identity resolver port.
//!
//! Maps the opaque credential a caller presented to the owner id every
//! goal operation runs under. The goal core never inspects credentials.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, CallerCredential, OwnerId};

/// Port for turning caller credentials into owner identities.
///
/// Implementations:
/// - `JwtIdentityResolver` - HS256 bearer tokens
/// - `MockIdentityResolver` - fixed token table for tests and local runs
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve a credential to the owner it authenticates.
    ///
    /// # Errors
    ///
    /// - `MissingCredential` if the credential is empty
    /// - `InvalidToken` / `TokenExpired` if it fails verification
    /// - `UnknownIdentity` if it verifies but names no usable owner
    /// - `ServiceUnavailable` if the backing service cannot be reached
    async fn resolve(&self, credential: &CallerCredential) -> Result<OwnerId, AuthError>;
}
