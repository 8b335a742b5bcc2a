//! Activity records: plain activities, runs, cycles and swims.

pub mod changes;
pub mod list;
pub mod types;

pub use changes::apply_changes;
pub use list::ActivityList;
pub use types::{Activity, ActivityChanges, ActivityDetails, ActivityKind, SwimmingStyle};
