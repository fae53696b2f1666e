/// SQLite persistence layer for activity records
///
/// One row per activity, keyed by name. Participants are stored as a JSON array
/// and mutated in place with SQLite's JSON functions so that every membership
/// change is a single conditional UPDATE.

use crate::activity::repository::ActivityRepository;
use crate::activity::types::{Activity, ActivityMap};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqlitePool, Row};

/// SQLite-based activity storage
#[derive(Debug, Clone)]
pub struct SqliteActivityStorage {
    /// SQLite connection pool shared for the process lifetime
    pool: SqlitePool,
}

impl SqliteActivityStorage {
    /// Create new storage instance with database connection
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the activities table
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS activities (
                name TEXT PRIMARY KEY,
                description TEXT NOT NULL,
                schedule TEXT NOT NULL,
                max_participants INTEGER NOT NULL,
                participants JSON NOT NULL DEFAULT '[]'
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn activity_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<(String, Activity)> {
        let name: String = row.get("name");
        let max_participants: i64 = row.get("max_participants");
        let participants_json: String = row.get("participants");

        let activity = Activity {
            description: row.get("description"),
            schedule: row.get("schedule"),
            max_participants: u32::try_from(max_participants).map_err(|_| {
                anyhow::anyhow!("Invalid max_participants {} for '{}'", max_participants, name)
            })?,
            participants: serde_json::from_str(&participants_json)?,
        };

        Ok((name, activity))
    }
}

#[async_trait]
impl ActivityRepository for SqliteActivityStorage {
    /// Replace every row inside one transaction
    ///
    /// Readers on other connections see either the old set or the new one.
    async fn replace_all(&self, activities: &ActivityMap) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM activities").execute(&mut *tx).await?;

        for (name, activity) in activities {
            let participants_json = serde_json::to_string(&activity.participants)?;
            sqlx::query(
                r#"
                INSERT INTO activities (name, description, schedule, max_participants, participants)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(name)
            .bind(&activity.description)
            .bind(&activity.schedule)
            .bind(i64::from(activity.max_participants))
            .bind(&participants_json)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn list(&self) -> Result<ActivityMap> {
        let rows = sqlx::query(
            "SELECT name, description, schedule, max_participants, participants FROM activities",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut activities = ActivityMap::new();
        for row in &rows {
            let (name, activity) = Self::activity_from_row(row)?;
            activities.insert(name, activity);
        }

        Ok(activities)
    }

    async fn get(&self, name: &str) -> Result<Option<Activity>> {
        let row = sqlx::query(
            "SELECT name, description, schedule, max_participants, participants FROM activities WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Self::activity_from_row(&row)?.1)),
            None => Ok(None),
        }
    }

    async fn add_participant(&self, name: &str, email: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE activities
            SET participants = json_insert(participants, '$[#]', ?1)
            WHERE name = ?2
              AND NOT EXISTS (
                  SELECT 1 FROM json_each(activities.participants) WHERE value = ?1
              )
            "#,
        )
        .bind(email)
        .bind(name)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_participant(&self, name: &str, email: &str) -> Result<bool> {
        // json_remove drops the matching element in place; the rest keep their order
        let result = sqlx::query(
            r#"
            UPDATE activities
            SET participants = json_remove(
                participants,
                (
                    SELECT fullkey FROM json_each(activities.participants)
                    WHERE value = ?1
                    LIMIT 1
                )
            )
            WHERE name = ?2
              AND EXISTS (
                  SELECT 1 FROM json_each(activities.participants) WHERE value = ?1
              )
            "#,
        )
        .bind(email)
        .bind(name)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
