//! Caller-supplied goal content.
//!
//! `GoalPayload` is what a caller may send for create and update. It has no
//! `id` or owner field: unknown keys such as `ownerId` are dropped during
//! deserialization, so a payload can never choose its owner.
//!
//! Every field except `title` is optional. An omitted field takes its
//! zero-value, which is what makes update a full replace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::{
    MAX_DESCRIPTION_LENGTH, MAX_LABEL_COLOR_LENGTH, MAX_PLEDGE_INTEGER_DIGITS, MAX_PLEDGE_SCALE,
    MAX_TITLE_LENGTH,
};
use super::{CompletionState, GoalDetails, GoalInterval};
use crate::domain::foundation::{Timestamp, ValidationError};

/// Due date as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DueDateInput {
    /// Unix epoch milliseconds.
    Millis(i64),
    /// RFC 3339 instant.
    Rfc3339(String),
}

impl DueDateInput {
    fn to_timestamp(&self) -> Result<Timestamp, ValidationError> {
        match self {
            DueDateInput::Millis(ms) => Timestamp::from_unix_millis(*ms),
            DueDateInput::Rfc3339(s) => Timestamp::parse_rfc3339(s),
        }
    }
}

/// Unvalidated goal fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub due_date: Option<DueDateInput>,
    #[serde(default)]
    pub task_unit_count: Option<i64>,
    #[serde(default)]
    pub pledge_amount: Option<Decimal>,
    #[serde(default)]
    pub label_color: Option<String>,
    #[serde(default)]
    pub completion_state: Option<CompletionState>,
}

impl GoalPayload {
    /// Convenience constructor for a payload carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Checks every field and produces the details to store.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `title` is missing or blank
    /// - `TooLong` if a text field exceeds its limit
    /// - `Negative` if `taskUnitCount` or `pledgeAmount` is below zero
    /// - `InvalidFormat` for an unknown interval, an unparseable due date,
    ///   a unit count that does not fit, or a pledge with more than four
    ///   decimal places or fifteen integer digits
    pub fn validate(&self) -> Result<GoalDetails, ValidationError> {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ValidationError::empty_field("title"))?;
        check_length("title", title, MAX_TITLE_LENGTH)?;

        let description = self.description.clone().unwrap_or_default();
        check_length("description", &description, MAX_DESCRIPTION_LENGTH)?;

        let label_color = self.label_color.clone().unwrap_or_default();
        check_length("label_color", &label_color, MAX_LABEL_COLOR_LENGTH)?;

        let interval = self
            .interval
            .as_deref()
            .map(str::parse::<GoalInterval>)
            .transpose()?;

        let due_date = self
            .due_date
            .as_ref()
            .map(DueDateInput::to_timestamp)
            .transpose()?;

        let task_unit_count = match self.task_unit_count {
            None => 0,
            Some(n) if n < 0 => return Err(ValidationError::negative("task_unit_count", n)),
            Some(n) => u32::try_from(n).map_err(|_| {
                ValidationError::invalid_format("task_unit_count", "value too large")
            })?,
        };

        let pledge_amount = self.pledge_amount.map(check_pledge).transpose()?;

        Ok(GoalDetails::reconstitute(
            title.to_string(),
            description,
            interval,
            due_date,
            task_unit_count,
            pledge_amount,
            label_color,
            self.completion_state.unwrap_or_default(),
        ))
    }
}

/// Pledges are stored as `NUMERIC(19, 4)`; anything the column would round
/// or overflow is refused here.
fn check_pledge(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::negative("pledge_amount", amount));
    }
    let amount = amount.normalize();
    if amount.scale() > MAX_PLEDGE_SCALE {
        return Err(ValidationError::invalid_format(
            "pledge_amount",
            format!("at most {} decimal places allowed", MAX_PLEDGE_SCALE),
        ));
    }
    if amount.trunc() >= Decimal::from(10_i64.pow(MAX_PLEDGE_INTEGER_DIGITS)) {
        return Err(ValidationError::invalid_format(
            "pledge_amount",
            format!("at most {} integer digits allowed", MAX_PLEDGE_INTEGER_DIGITS),
        ));
    }
    Ok(amount)
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::too_long(field, max, actual));
    }
    Ok(())
}
