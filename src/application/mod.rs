//! Application layer - command/query handlers and the goal lifecycle service.

pub mod handlers;

mod goal_lifecycle;

pub use goal_lifecycle::GoalLifecycleService;
