//! Database operations using rusqlite.
//!
//! The journal is small, so saves rewrite each table inside one transaction
//! and loads read everything back in listing order.

use crate::activity::list::ActivityList;
use crate::activity::types::{Activity, ActivityDetails};
use crate::goals::manager::{GoalError, GoalManager};
use crate::goals::types::ActivityGoal;
use crate::storage::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};
use chrono::{NaiveDateTime, NaiveTime};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::path::Path;
use thiserror::Error;

const STORED_DURATION_FORMAT: &str = "%H:%M:%S";
const STORED_START_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Initialize the database schema.
    fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        let current_version = self.get_schema_version()?;

        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    fn get_schema_version(&self) -> Result<i32, DatabaseError> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> Result<(), DatabaseError> {
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        Ok(())
    }

    // ========== Activities ==========

    /// Replace all stored activities with `activities`.
    pub fn save_activities(&mut self, activities: &ActivityList) -> Result<(), DatabaseError> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tx.execute("DELETE FROM activities", [])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        for (position, activity) in activities.iter().enumerate() {
            let details_json = serde_json::to_string(&activity.details)
                .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

            tx.execute(
                "INSERT INTO activities (position, caption, duration, distance, start, details_json)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    position as i64,
                    activity.caption,
                    activity.duration.format(STORED_DURATION_FORMAT).to_string(),
                    activity.distance,
                    activity.start.format(STORED_START_FORMAT).to_string(),
                    details_json,
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tracing::debug!("Saved {} activities", activities.len());

        Ok(())
    }

    /// Load all stored activities in listing order.
    pub fn load_activities(&self) -> Result<ActivityList, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT caption, duration, distance, start, details_json
                 FROM activities ORDER BY position ASC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ActivityRow {
                    caption: row.get(0)?,
                    duration: row.get(1)?,
                    distance: row.get(2)?,
                    start: row.get(3)?,
                    details_json: row.get(4)?,
                })
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut activities = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            activities.push(row.into_activity()?);
        }

        Ok(ActivityList::from_activities(activities))
    }

    // ========== Activity goals ==========

    /// Replace all stored goals with `goals`.
    pub fn save_goals(&self, goals: &[ActivityGoal]) -> Result<(), DatabaseError> {
        GoalManager::new(&self.conn)
            .replace_all(goals)
            .map_err(DatabaseError::from)
    }

    /// Load all stored goals.
    pub fn load_goals(&self) -> Result<Vec<ActivityGoal>, DatabaseError> {
        GoalManager::new(&self.conn)
            .list()
            .map_err(DatabaseError::from)
    }
}

/// Raw activity row before conversion.
struct ActivityRow {
    caption: String,
    duration: String,
    distance: u32,
    start: String,
    details_json: String,
}

impl ActivityRow {
    fn into_activity(self) -> Result<Activity, DatabaseError> {
        let duration = NaiveTime::parse_from_str(&self.duration, STORED_DURATION_FORMAT)
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid duration: {}", e)))?;
        let start = NaiveDateTime::parse_from_str(&self.start, STORED_START_FORMAT)
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid start: {}", e)))?;
        let details: ActivityDetails = serde_json::from_str(&self.details_json)
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid details: {}", e)))?;

        Ok(Activity::new(
            self.caption,
            duration,
            self.distance,
            start,
            details,
        ))
    }
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<GoalError> for DatabaseError {
    fn from(err: GoalError) -> Self {
        match err {
            GoalError::DatabaseError(e) => DatabaseError::QueryFailed(e.to_string()),
            GoalError::SerializationError(e) => DatabaseError::SerializationError(e.to_string()),
        }
    }
}
