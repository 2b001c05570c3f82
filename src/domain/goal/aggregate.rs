//! Goal aggregate entity.
//!
//! A goal belongs to exactly one owner for its whole life. The owner is
//! stamped at creation from the resolved caller and no later operation can
//! change it; updates replace only `GoalDetails`.
//!
//! # Versioning
//!
//! Every stored goal carries a `version`. The store compares it on update
//! and delete, so a writer holding a stale copy gets a conflict instead of
//! silently overwriting a newer state.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{CompletionState, GoalInterval};
use crate::domain::foundation::{GoalId, OwnedBy, OwnerId, Timestamp};

/// Maximum length for goal title.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Maximum length for goal description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Maximum length for the label colour tag.
pub const MAX_LABEL_COLOR_LENGTH: usize = 32;

/// Decimal places kept for a pledge amount.
pub const MAX_PLEDGE_SCALE: u32 = 4;

/// Digits allowed before the decimal point of a pledge amount.
pub const MAX_PLEDGE_INTEGER_DIGITS: u32 = 15;

/// Version assigned to a goal on first insert.
pub const INITIAL_VERSION: u64 = 1;

/// The mutable portion of a goal.
///
/// Only constructed through `GoalPayload::validate` or `reconstitute`, so
/// a value in hand always satisfies the field limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalDetails {
    title: String,
    description: String,
    interval: Option<GoalInterval>,
    due_date: Option<Timestamp>,
    task_unit_count: u32,
    pledge_amount: Option<Decimal>,
    label_color: String,
    completion_state: CompletionState,
}

impl GoalDetails {
    /// Reconstitute details from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        title: String,
        description: String,
        interval: Option<GoalInterval>,
        due_date: Option<Timestamp>,
        task_unit_count: u32,
        pledge_amount: Option<Decimal>,
        label_color: String,
        completion_state: CompletionState,
    ) -> Self {
        Self {
            title,
            description,
            interval,
            due_date,
            task_unit_count,
            pledge_amount,
            label_color,
            completion_state,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn interval(&self) -> Option<GoalInterval> {
        self.interval
    }

    pub fn due_date(&self) -> Option<&Timestamp> {
        self.due_date.as_ref()
    }

    pub fn task_unit_count(&self) -> u32 {
        self.task_unit_count
    }

    /// Returns the pledge, or `None` when no pledge was made.
    pub fn pledge_amount(&self) -> Option<Decimal> {
        self.pledge_amount
    }

    pub fn label_color(&self) -> &str {
        &self.label_color
    }

    pub fn completion_state(&self) -> CompletionState {
        self.completion_state
    }
}

/// A goal that has not been stored yet and so has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    owner_id: OwnerId,
    details: GoalDetails,
    created_at: Timestamp,
}

impl NewGoal {
    /// Creates a goal owned by `owner_id`.
    ///
    /// The owner must be the resolved caller, never a payload value.
    pub(crate) fn new(owner_id: OwnerId, details: GoalDetails) -> Self {
        Self {
            owner_id,
            details,
            created_at: Timestamp::now(),
        }
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    pub fn details(&self) -> &GoalDetails {
        &self.details
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Materializes the stored goal once the store has assigned an id.
    pub fn into_goal(self, id: GoalId) -> Goal {
        Goal {
            id,
            owner_id: self.owner_id,
            details: self.details,
            version: INITIAL_VERSION,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Goal aggregate - one owner's unit of tracked work.
///
/// # Invariants
///
/// - `id` is assigned by the store and never changes
/// - `owner_id` is set once at creation and never changes
/// - `version` starts at 1 and increases by one per stored update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goal {
    id: GoalId,
    owner_id: OwnerId,
    details: GoalDetails,
    version: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Goal {
    /// Reconstitute a goal from persistence (no validation).
    pub fn reconstitute(
        id: GoalId,
        owner_id: OwnerId,
        details: GoalDetails,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            details,
            version,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the goal ID.
    pub fn id(&self) -> GoalId {
        self.id
    }

    /// Returns the mutable fields.
    pub fn details(&self) -> &GoalDetails {
        &self.details
    }

    /// Returns the version the store last recorded.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns when the goal was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the goal was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces every mutable field. `id`, `owner_id` and `version` stay put;
    /// the store bumps the version when it accepts the write.
    pub(crate) fn replace_details(&mut self, details: GoalDetails) {
        self.details = details;
        self.updated_at = Timestamp::now();
    }

    /// Returns the state the store records after accepting this goal as an update.
    pub fn next_version(&self) -> Goal {
        Goal {
            version: self.version + 1,
            ..self.clone()
        }
    }
}

impl OwnedBy for Goal {
    fn owner_id(&self) -> OwnerId {
        self.owner_id
    }
}
