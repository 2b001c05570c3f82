//! Storage adapters that need no external service.

mod in_memory_goal_store;

pub use in_memory_goal_store::InMemoryGoalStore;
