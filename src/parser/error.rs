//! Parse error types.

use thiserror::Error;

use crate::activity::types::ActivityKind;
use crate::parser::tags::Field;

/// Errors raised while parsing, building or applying journal records.
///
/// The display strings are the messages shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required tag does not occur in the input.
    #[error("Please specify the {field} using \"{tag}\"!")]
    MissingField { field: Field, tag: String },

    /// The tag occurs but nothing follows it.
    #[error("The {0} cannot be empty!")]
    EmptyField(Field),

    /// The value is present but cannot be read as its type.
    #[error("{}", format_message(.0))]
    InvalidFormat(Field),

    /// The value parsed but must not be negative.
    #[error("The {0} cannot be negative!")]
    NegativeValue(Field),

    /// The value is not one of the accepted symbols.
    #[error("{}", enum_message(.0))]
    InvalidEnum(Field),

    /// An edit named none of the fields it could change.
    #[error("Please specify at least one field to change!")]
    EmptyEdit,

    /// An edit command had nothing after the index.
    #[error("Please specify the index followed by the fields to change!")]
    InvalidEdit,

    /// The index is not a positive integer.
    #[error("The index must be a positive integer!")]
    InvalidIndex,

    /// The index does not refer to an existing entry.
    #[error("There is no entry at index {0}!")]
    IndexOutOfRange(usize),

    /// The entry at the index is of a different kind than the command expects.
    #[error("The entry at this index is not a {expected} (found {found})!")]
    KindMismatch {
        expected: ActivityKind,
        found: ActivityKind,
    },

    /// A change targets a field the record does not have.
    #[error("The {field} cannot be changed on this {kind}!")]
    UnsupportedChange { field: Field, kind: ActivityKind },

    /// The command keyword is not recognised.
    #[error("Unknown command \"{0}\"!")]
    UnknownCommand(String),
}

fn format_message(field: &Field) -> &'static str {
    match field {
        Field::Duration => "The duration must be in the format \"HH:mm:ss\"!",
        Field::Distance => "The distance must be an integer number of meters!",
        Field::Elevation => "The elevation must be an integer number of meters!",
        Field::Target => "The target must be an integer!",
        Field::Datetime => "The datetime must be in the format \"yyyy-MM-dd HH:mm\"!",
        _ => "The value could not be read!",
    }
}

fn enum_message(field: &Field) -> &'static str {
    match field {
        Field::SwimmingStyle => {
            "The swimming style must be one of butterfly, backstroke, breaststroke or freestyle!"
        }
        Field::Sport => "The sport must be one of running, cycling, swimming or general!",
        Field::GoalType => "The goal type must be either distance or duration!",
        Field::Period => "The period must be one of daily, weekly, monthly or yearly!",
        _ => "The value is not one of the accepted options!",
    }
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;
