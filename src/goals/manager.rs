//! Activity goal persistence.

use rusqlite::{params, Connection};

use super::types::ActivityGoal;

/// Stores activity goals in the `activity_goals` table.
pub struct GoalManager<'a> {
    conn: &'a Connection,
}

impl<'a> GoalManager<'a> {
    /// Create a new goal manager with a database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get all goals in the order they were set.
    pub fn list(&self) -> Result<Vec<ActivityGoal>, GoalError> {
        let mut stmt = self.conn.prepare(
            "SELECT period, goal_type, sport, target
             FROM activity_goals
             ORDER BY position ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, u32>(3)?,
            ))
        })?;

        let mut goals = Vec::new();
        for row in rows {
            let (period, goal_type, sport, target) = row?;
            goals.push(ActivityGoal {
                period: serde_json::from_str(&period)?,
                goal_type: serde_json::from_str(&goal_type)?,
                sport: serde_json::from_str(&sport)?,
                target,
            });
        }

        Ok(goals)
    }

    /// Replace every stored goal with `goals`.
    pub fn replace_all(&self, goals: &[ActivityGoal]) -> Result<(), GoalError> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute("DELETE FROM activity_goals", [])?;

        for (position, goal) in goals.iter().enumerate() {
            tx.execute(
                "INSERT INTO activity_goals (position, period, goal_type, sport, target)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    position as i64,
                    serde_json::to_string(&goal.period)?,
                    serde_json::to_string(&goal.goal_type)?,
                    serde_json::to_string(&goal.sport)?,
                    goal.target,
                ],
            )?;
        }

        tx.commit()?;

        Ok(())
    }
}

/// Goal management errors.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
