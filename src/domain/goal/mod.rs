//! Goal module - owner-scoped goals and their lifecycle rules.

mod aggregate;
mod completion_state;
mod errors;
mod interval;
mod payload;

pub use aggregate::{
    Goal, GoalDetails, NewGoal, INITIAL_VERSION, MAX_DESCRIPTION_LENGTH, MAX_LABEL_COLOR_LENGTH,
    MAX_PLEDGE_INTEGER_DIGITS, MAX_PLEDGE_SCALE, MAX_TITLE_LENGTH,
};
pub use completion_state::CompletionState;
pub use errors::GoalError;
pub use interval::GoalInterval;
pub use payload::{DueDateInput, GoalPayload};
