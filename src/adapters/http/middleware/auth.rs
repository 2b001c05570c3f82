//! Bearer credential extraction for axum.
//!
//! The extractor never rejects. It only lifts the token out of the
//! `Authorization` header; verifying it is the `IdentityResolver`'s job,
//! reached through the lifecycle service. A missing or non-bearer header
//! yields an empty credential, which every resolver refuses.
//!
//! ```text
//! Request ─► BearerCredential ─► GoalLifecycleService ─► IdentityResolver
//! ```

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};

use crate::domain::foundation::CallerCredential;

/// Caller credential lifted from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct BearerCredential(pub CallerCredential);

#[async_trait]
impl<S> FromRequestParts<S> for BearerCredential
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let credential = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(|token| CallerCredential::new(token.trim()))
            .unwrap_or_else(CallerCredential::anonymous);

        Ok(BearerCredential(credential))
    }
}
