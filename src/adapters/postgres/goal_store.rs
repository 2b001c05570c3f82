//! PostgreSQL implementation of GoalStore.
//!
//! Persists Goal aggregates to the `goals` table. Writes are compare-and-swap
//! on `(id, version)`: zero affected rows means the goal moved on or was
//! removed, which surfaces as `Conflict`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, GoalId, OwnerId, Timestamp};
use crate::domain::goal::{CompletionState, Goal, GoalDetails, GoalInterval, NewGoal};
use crate::ports::GoalStore;

const GOAL_COLUMNS: &str = "id, owner_id, title, description, interval, due_date, \
     task_unit_count, pledge_amount, label_color, completion_state, version, \
     created_at, updated_at";

/// PostgreSQL implementation of GoalStore.
#[derive(Clone)]
pub struct PostgresGoalStore {
    pool: PgPool,
}

impl PostgresGoalStore {
    /// Creates a new PostgresGoalStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalStore for PostgresGoalStore {
    async fn find_by_id(&self, id: GoalId) -> Result<Option<Goal>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM goals WHERE id = $1", GOAL_COLUMNS))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch goal", e))?;

        row.map(row_to_goal).transpose()
    }

    async fn find_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Goal>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM goals WHERE owner_id = $1 ORDER BY id ASC",
            GOAL_COLUMNS
        ))
        .bind(owner_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch goals by owner", e))?;

        rows.into_iter().map(row_to_goal).collect()
    }

    async fn insert(&self, goal: &NewGoal) -> Result<Goal, DomainError> {
        let details = goal.details();
        let row = sqlx::query(
            r#"
            INSERT INTO goals (
                owner_id, title, description, interval, due_date, task_unit_count,
                pledge_amount, label_color, completion_state, version, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 1, $10, $10)
            RETURNING id
            "#,
        )
        .bind(goal.owner_id().as_i64())
        .bind(details.title())
        .bind(details.description())
        .bind(details.interval().map(|i| i.as_str()))
        .bind(details.due_date().map(|d| *d.as_datetime()))
        .bind(i64::from(details.task_unit_count()))
        .bind(details.pledge_amount())
        .bind(details.label_color())
        .bind(details.completion_state().as_str())
        .bind(goal.created_at().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert goal", e))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::database("Failed to get id", e))?;

        Ok(goal.clone().into_goal(GoalId::new(id)))
    }

    async fn update(&self, goal: &Goal) -> Result<Goal, DomainError> {
        let details = goal.details();
        let result = sqlx::query(
            r#"
            UPDATE goals SET
                title = $3,
                description = $4,
                interval = $5,
                due_date = $6,
                task_unit_count = $7,
                pledge_amount = $8,
                label_color = $9,
                completion_state = $10,
                updated_at = $11,
                version = version + 1
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(goal.id().as_i64())
        .bind(version_to_db(goal.version())?)
        .bind(details.title())
        .bind(details.description())
        .bind(details.interval().map(|i| i.as_str()))
        .bind(details.due_date().map(|d| *d.as_datetime()))
        .bind(i64::from(details.task_unit_count()))
        .bind(details.pledge_amount())
        .bind(details.label_color())
        .bind(details.completion_state().as_str())
        .bind(goal.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update goal", e))?;

        if result.rows_affected() == 0 {
            return Err(stale(goal));
        }

        Ok(goal.next_version())
    }

    async fn delete(&self, goal: &Goal) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND version = $2")
            .bind(goal.id().as_i64())
            .bind(version_to_db(goal.version())?)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete goal", e))?;

        if result.rows_affected() == 0 {
            return Err(stale(goal));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn stale(goal: &Goal) -> DomainError {
    DomainError::new(
        ErrorCode::Conflict,
        format!("Goal {} changed since version {}", goal.id(), goal.version()),
    )
    .with_detail("goal_id", goal.id().to_string())
    .with_detail("expected_version", goal.version().to_string())
}

fn version_to_db(version: u64) -> Result<i64, DomainError> {
    i64::try_from(version).map_err(|e| DomainError::database("Goal version out of range", e))
}

fn row_to_goal(row: sqlx::postgres::PgRow) -> Result<Goal, DomainError> {
    let id: i64 = get(&row, "id")?;
    let owner_id: i64 = get(&row, "owner_id")?;
    let title: String = get(&row, "title")?;
    let description: String = get(&row, "description")?;
    let interval: Option<String> = get(&row, "interval")?;
    let due_date: Option<chrono::DateTime<chrono::Utc>> = get(&row, "due_date")?;
    let task_unit_count: i64 = get(&row, "task_unit_count")?;
    let pledge_amount: Option<Decimal> = get(&row, "pledge_amount")?;
    let label_color: String = get(&row, "label_color")?;
    let completion_state: String = get(&row, "completion_state")?;
    let version: i64 = get(&row, "version")?;
    let created_at: chrono::DateTime<chrono::Utc> = get(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = get(&row, "updated_at")?;

    let interval = interval
        .map(|s| s.parse::<GoalInterval>())
        .transpose()
        .map_err(|e| DomainError::database("Invalid interval", e))?;
    let completion_state = completion_state
        .parse::<CompletionState>()
        .map_err(|e| DomainError::database("Invalid completion_state", e))?;
    let task_unit_count = u32::try_from(task_unit_count)
        .map_err(|e| DomainError::database("Invalid task_unit_count", e))?;
    let version =
        u64::try_from(version).map_err(|e| DomainError::database("Invalid version", e))?;
    let owner_id =
        OwnerId::new(owner_id).map_err(|e| DomainError::database("Invalid owner_id", e))?;

    let details = GoalDetails::reconstitute(
        title,
        description,
        interval,
        due_date.map(Timestamp::from_datetime),
        task_unit_count,
        pledge_amount,
        label_color,
        completion_state,
    );

    Ok(Goal::reconstitute(
        GoalId::new(id),
        owner_id,
        details,
        version,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

fn get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", column), e))
}
