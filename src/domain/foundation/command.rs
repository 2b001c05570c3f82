//! Command infrastructure for CQRS handlers.
//!
//! `CommandMetadata` carries the resolved owner plus tracing context through
//! command processing, so handlers can log with consistent fields instead of
//! each accepting loose `correlation_id` / `source` parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::OwnerId;

/// Metadata context for command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The resolved owner executing this command.
    pub owner_id: OwnerId,

    /// Links related log lines across a single request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "api", "seed").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata for a resolved owner.
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            correlation_id: None,
            source: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source, defaulting to "unknown".
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or("unknown")
    }
}
