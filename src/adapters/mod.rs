//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Identity resolvers (JWT, mock)
//! - `storage` - In-memory goal store
//! - `postgres` - PostgreSQL goal store and pool bootstrap
//! - `http` - axum REST API
//! - `seed` - Startup fixture loaders

pub mod auth;
pub mod http;
pub mod postgres;
pub mod seed;
pub mod storage;

pub use auth::{JwtIdentityResolver, MockIdentityResolver};
pub use postgres::PostgresGoalStore;
pub use storage::InMemoryGoalStore;
