//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `GoalStore` - Goal persistence with version-checked writes
//! - `IdentityResolver` - Caller credential to owner id

mod goal_store;
mod identity_resolver;

pub use goal_store::GoalStore;
pub use identity_resolver::IdentityResolver;
