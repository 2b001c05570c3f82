//! Mock identity resolver for tests and local development.
//!
//! Maps fixed token strings to owner ids, so tests can act as several
//! owners without minting real tokens.
//!
//! # Example
//!
//! ```ignore
//! use goal_keeper::adapters::auth::MockIdentityResolver;
//!
//! let resolver = MockIdentityResolver::new()
//!     .with_owner("alice-token", 1)
//!     .with_owner("bob-token", 2);
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, CallerCredential, OwnerId};
use crate::ports::IdentityResolver;

/// Token table resolver.
///
/// Unknown tokens return `InvalidToken`; an empty credential returns
/// `MissingCredential`.
#[derive(Debug, Default, Clone)]
pub struct MockIdentityResolver {
    tokens: HashMap<String, OwnerId>,
    force_error: Option<AuthError>,
}

impl MockIdentityResolver {
    /// Creates a resolver that knows no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token that resolves to `owner_id`.
    ///
    /// Non-positive ids are ignored, so the token stays unknown.
    pub fn with_owner(mut self, token: impl Into<String>, owner_id: i64) -> Self {
        if let Ok(owner) = OwnerId::new(owner_id) {
            self.tokens.insert(token.into(), owner);
        }
        self
    }

    /// Forces every resolution to fail with `error`.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }
}

#[async_trait]
impl IdentityResolver for MockIdentityResolver {
    async fn resolve(&self, credential: &CallerCredential) -> Result<OwnerId, AuthError> {
        if let Some(err) = &self.force_error {
            return Err(err.clone());
        }
        if credential.is_empty() {
            return Err(AuthError::MissingCredential);
        }
        self.tokens
            .get(credential.expose())
            .copied()
            .ok_or(AuthError::InvalidToken)
    }
}
