//! Identity resolver adapters.
//!
//! Implementations of the `IdentityResolver` port:
//!
//! - `jwt` - HS256 bearer tokens carrying a numeric `sub`
//! - `mock` - Fixed token table for tests and local runs

mod jwt;
mod mock;

pub use jwt::{GoalKeeperClaims, JwtIdentityResolver};
pub use mock::MockIdentityResolver;
