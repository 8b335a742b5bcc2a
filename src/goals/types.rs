//! Activity goal type definitions.

use serde::{Deserialize, Serialize};

/// A target for a sport over a recurring period, e.g. run 20 km weekly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityGoal {
    /// Period the target applies to
    pub period: Period,
    /// What is being measured
    pub goal_type: GoalType,
    /// Sport the goal counts
    pub sport: Sport,
    /// Target amount (meters for distance goals, minutes for duration goals)
    pub target: u32,
}

impl ActivityGoal {
    /// Create a new activity goal.
    pub fn new(period: Period, goal_type: GoalType, sport: Sport, target: u32) -> Self {
        Self {
            period,
            goal_type,
            sport,
            target,
        }
    }
}

impl std::fmt::Display for ActivityGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} {}: {} {}",
            self.period,
            self.sport,
            self.goal_type,
            self.target,
            self.goal_type.unit()
        )
    }
}

/// Sport counted by a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Running,
    Cycling,
    Swimming,
    /// Any activity
    General,
}

impl Sport {
    /// Match a sport name case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "running" => Some(Sport::Running),
            "cycling" => Some(Sport::Cycling),
            "swimming" => Some(Sport::Swimming),
            "general" => Some(Sport::General),
            _ => None,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sport::Running => "Running",
            Sport::Cycling => "Cycling",
            Sport::Swimming => "Swimming",
            Sport::General => "General",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Quantity a goal measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Distance,
    Duration,
}

impl GoalType {
    /// Match a goal type name case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "distance" => Some(GoalType::Distance),
            "duration" => Some(GoalType::Duration),
            _ => None,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalType::Distance => "distance",
            GoalType::Duration => "duration",
        }
    }

    /// Get unit of the target.
    pub fn unit(&self) -> &'static str {
        match self {
            GoalType::Distance => "m",
            GoalType::Duration => "min",
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Recurring period of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    /// Match a period name case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "daily" => Some(Period::Daily),
            "weekly" => Some(Period::Weekly),
            "monthly" => Some(Period::Monthly),
            "yearly" => Some(Period::Yearly),
            _ => None,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
