use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::JournalEntry;
use crate::models::NewEntry;
use crate::MoodMeshError;
use crate::Result;

/// Database connection pool wrapper
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS entries (
    id BIGSERIAL PRIMARY KEY,
    user_id TEXT NOT NULL,
    user_name TEXT NOT NULL,
    country TEXT NOT NULL,
    entry_text TEXT NOT NULL,
    entry_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    mood SMALLINT NOT NULL,
    social SMALLINT NOT NULL,
    work SMALLINT NOT NULL,
    energy SMALLINT NOT NULL,
    health SMALLINT NOT NULL,
    sleep SMALLINT NOT NULL,
    stress SMALLINT NOT NULL,
    time_of_day TEXT,
    day_ref TEXT,
    duration_hint TEXT,
    UNIQUE (user_id, entry_date)
);

CREATE INDEX IF NOT EXISTS idx_entries_country_date ON entries (country, entry_date);
";

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new database instance from configuration
    pub async fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        let pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(std::time::Duration::from_secs(config.connection_timeout()));

        let pool = pool_options.connect(config.database_url()).await?;
        Ok(Self::new(pool))
    }

    /// Get a reference to the database pool for raw queries
    pub fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }

    /// Create the entries table and indexes if they are missing
    pub async fn init_schema(&self) -> Result<()> {
        for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert one journal entry and return the stored row.
    ///
    /// The (user_id, entry_date) uniqueness constraint turns a same-day
    /// double post into a database error; callers probe with
    /// [`Database::has_posted_on`] first for a friendly rejection.
    pub async fn create_entry(&self, entry: NewEntry) -> Result<JournalEntry> {
        let scores = entry.scores;
        let time = scores.time;

        let stored = sqlx::query_as::<_, JournalEntry>(
            r"
            INSERT INTO entries (
                user_id, user_name, country, entry_text, entry_date,
                mood, social, work, energy, health, sleep, stress,
                time_of_day, day_ref, duration_hint
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            ",
        )
        .bind(&entry.user_id)
        .bind(&entry.user_name)
        .bind(&entry.country)
        .bind(&entry.entry_text)
        .bind(entry.entry_date)
        .bind(i16::from(scores.mood))
        .bind(i16::from(scores.social))
        .bind(i16::from(scores.work))
        .bind(i16::from(scores.energy))
        .bind(i16::from(scores.health))
        .bind(i16::from(scores.sleep))
        .bind(i16::from(scores.stress))
        .bind(time.and_then(|t| t.time_of_day).map(|v| v.as_str().to_string()))
        .bind(time.and_then(|t| t.day).map(|v| v.as_str().to_string()))
        .bind(time.and_then(|t| t.duration).map(|v| v.as_str().to_string()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // Lost the race against a concurrent same-day submission
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                MoodMeshError::AlreadyPostedToday {
                    user_id: entry.user_id.clone(),
                    date: entry.entry_date.to_string(),
                }
            }
            _ => MoodMeshError::Database(e),
        })?;

        Ok(stored)
    }

    /// Whether the user already has an entry for the given date
    pub async fn has_posted_on(&self, user_id: &str, date: NaiveDate) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM entries WHERE user_id = $1 AND entry_date = $2",
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// All entries for one country on one date
    pub async fn list_entries_by_country_date(
        &self,
        country: &str,
        date: NaiveDate,
    ) -> Result<Vec<JournalEntry>> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            "SELECT * FROM entries WHERE country = $1 AND entry_date = $2 ORDER BY created_at",
        )
        .bind(country)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// All entries for one country with `start <= entry_date < end`
    pub async fn list_entries_by_country_date_range(
        &self,
        country: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<JournalEntry>> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            r"
            SELECT * FROM entries
            WHERE country = $1 AND entry_date >= $2 AND entry_date < $3
            ORDER BY entry_date, created_at
            ",
        )
        .bind(country)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Distinct countries with at least one entry, sorted
    pub async fn list_countries(&self) -> Result<Vec<String>> {
        let countries: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT country FROM entries ORDER BY country")
                .fetch_all(&self.pool)
                .await?;

        Ok(countries)
    }

    /// Total number of stored entries
    pub async fn count_entries(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
