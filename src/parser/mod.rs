//! Tagged free-text argument parsing.
//!
//! Raw command arguments flow through the locator (tag positions and value
//! spans), the field validators and scalar parsers, and finally a record or
//! change builder.

pub mod activity;
pub mod datetime;
pub mod error;
pub mod fields;
pub mod goal;
pub mod locator;
pub mod tags;

pub use activity::{
    parse_activity, parse_activity_changes, parse_activity_edit, parse_edit_index, parse_index,
    parse_list_detail,
};
pub use datetime::{parse_date, parse_datetime};
pub use error::{ParseError, ParseResult};
pub use goal::parse_activity_goal;
pub use locator::{locate, LocatedFields};
pub use tags::{Field, TagTable};
