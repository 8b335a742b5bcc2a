//! FitLog - Command-line Fitness Journal
//!
//! Records activities, runs, cycles, swims and activity goals from free-form,
//! tag-delimited commands such as
//! `run Morning Run duration/01:30:00 distance/10000 datetime/2023-10-06 10:00 elevation/50`.
//! Edits apply sparse changes to a stored record without touching other fields.

pub mod activity;
pub mod commands;
pub mod goals;
pub mod parser;
pub mod storage;

// Re-export commonly used types
pub use activity::{Activity, ActivityChanges, ActivityKind, ActivityList};
pub use commands::{parse_command, Command, Journal};
pub use parser::{ParseError, ParseResult, TagTable};
pub use storage::config::AppConfig;
