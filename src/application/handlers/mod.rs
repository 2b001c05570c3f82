//! Command and query handlers.

pub mod goal;
