//! Authentication types for the domain layer.
//!
//! The core never authenticates anyone itself. It receives an opaque
//! `CallerCredential` from the transport and hands it to the
//! `IdentityResolver` port, which either yields an `OwnerId` or an
//! `AuthError`. Any provider (JWT, static token table) can sit behind it.

use std::fmt;
use thiserror::Error;

/// Opaque credential presented by a caller.
///
/// Typically the raw bearer token. Never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct CallerCredential(String);

impl CallerCredential {
    /// Wraps a raw credential string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// A credential carrying nothing; always fails resolution.
    pub fn anonymous() -> Self {
        Self(String::new())
    }

    /// Returns the raw credential.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if no credential was presented.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for CallerCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallerCredential([REDACTED])")
    }
}

/// Reasons a credential could not be resolved to an owner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No credential was presented.
    #[error("Missing credential")]
    MissingCredential,

    /// The token is malformed or has an invalid signature.
    #[error("Invalid token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token is valid but names no known identity.
    #[error("Unknown identity")]
    UnknownIdentity,

    /// The identity backend could not be reached.
    #[error("Identity service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_debug_is_redacted() {
        let cred = CallerCredential::new("super-secret-token");
        let shown = format!("{:?}", cred);
        assert!(!shown.contains("super-secret-token"));
        assert!(shown.contains("REDACTED"));
    }

    #[test]
    fn anonymous_credential_is_empty() {
        assert!(CallerCredential::anonymous().is_empty());
        assert!(CallerCredential::new("   ").is_empty());
        assert!(!CallerCredential::new("t").is_empty());
    }

    #[test]
    fn auth_error_service_unavailable_displays_message() {
        let err = AuthError::service_unavailable("Connection refused");
        assert_eq!(
            format!("{}", err),
            "Identity service unavailable: Connection refused"
        );
    }

    #[test]
    fn auth_error_is_transient_for_service_errors() {
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(!AuthError::InvalidToken.is_transient());
        assert!(!AuthError::MissingCredential.is_transient());
    }
}
