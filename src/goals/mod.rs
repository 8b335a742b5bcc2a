//! Activity goals module.
//!
//! Goals set a recurring target for a sport:
//! - a distance in meters or a duration in minutes
//! - over a daily, weekly, monthly or yearly period

pub mod manager;
pub mod types;

// Re-exports for convenience
pub use manager::{GoalError, GoalManager};
pub use types::{ActivityGoal, GoalType, Period, Sport};
