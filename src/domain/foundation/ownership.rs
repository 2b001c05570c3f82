//! Ownership trait for owner-scoped resources.
//!
//! Single-owner resources implement `OwnedBy`. The ownership decision
//! itself lives in `AuthorizationGuard` so every handler makes it the same way.

use super::OwnerId;

/// Trait for aggregates that have exactly one owner.
///
/// For shared resources use a different authorization mechanism; this
/// trait assumes the owner never changes after creation.
pub trait OwnedBy {
    /// Returns the ID of the owner recorded on this resource.
    fn owner_id(&self) -> OwnerId;

    /// Checks if the given owner matches the recorded one.
    fn is_owned_by(&self, owner_id: OwnerId) -> bool {
        self.owner_id() == owner_id
    }
}
