use crate::DbError;
use crate::store::MissionStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{MoonMission, NewAccount};
use sqlx::postgres::PgPool;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` over the session's connection.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes the underlying connection. Further queries fail.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection closed.");
    }
}

/// The half-open `[Jan 1 year, Jan 1 year + 1)` launch-date range of a year.
///
/// Returns `None` for years outside the calendar `chrono` can represent; no
/// mission can be launched in such a year.
fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?;
    Some((start, end))
}

#[async_trait]
impl MissionStore for DbRepository {
    async fn find_passwords_for(&self, name: &str) -> Result<Vec<String>, DbError> {
        let passwords = sqlx::query_scalar::<_, String>(
            "SELECT password FROM account WHERE name = $1",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(passwords)
    }

    async fn list_missions(&self) -> Result<Vec<MoonMission>, DbError> {
        let missions = sqlx::query_as::<_, MoonMission>(
            r#"
            SELECT mission_id, spacecraft, launch_date, operator, mission_type, outcome
            FROM moon_mission
            ORDER BY launch_date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(missions)
    }

    async fn find_mission(&self, mission_id: i64) -> Result<Option<MoonMission>, DbError> {
        let mission = sqlx::query_as::<_, MoonMission>(
            r#"
            SELECT mission_id, spacecraft, launch_date, operator, mission_type, outcome
            FROM moon_mission
            WHERE mission_id = $1
            "#,
        )
        .bind(mission_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(mission)
    }

    async fn count_missions_in_year(&self, year: i32) -> Result<i64, DbError> {
        let Some((start, end)) = year_bounds(year) else {
            return Ok(0);
        };

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM moon_mission WHERE launch_date >= $1 AND launch_date < $2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn create_account(&self, account: &NewAccount) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO account (first_name, last_name, ssn, name, password)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.ssn)
        .bind(&account.name)
        .bind(&account.password)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn update_password(&self, user_id: i64, password: &str) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE account SET password = $1 WHERE user_id = $2")
            .bind(password)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_account(&self, user_id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM account WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
