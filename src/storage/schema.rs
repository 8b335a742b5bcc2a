//! Database schema definitions for the journal.

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Activities table, in listing order
CREATE TABLE IF NOT EXISTS activities (
    position INTEGER PRIMARY KEY,
    caption TEXT NOT NULL,
    duration TEXT NOT NULL,
    distance INTEGER NOT NULL,
    start TEXT NOT NULL,
    details_json TEXT NOT NULL
);

-- Activity goals table, in the order they were set
CREATE TABLE IF NOT EXISTS activity_goals (
    position INTEGER PRIMARY KEY,
    period TEXT NOT NULL,
    goal_type TEXT NOT NULL,
    sport TEXT NOT NULL,
    target INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_activities_start ON activities(start);
"#;

/// Schema version table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;
