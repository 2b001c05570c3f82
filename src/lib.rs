//! Goal Keeper - owner-scoped goal tracking service
//!
//! Every goal belongs to the identity that created it. Only that identity
//! can list, update or delete it; existence is always checked before
//! ownership, and writes are version-checked against concurrent edits.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
