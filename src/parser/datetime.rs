//! Date and time parsing shared by all commands.

use chrono::{NaiveDate, NaiveDateTime};

use crate::parser::error::{ParseError, ParseResult};
use crate::parser::fields::has_digit_groups;
use crate::parser::tags::Field;

/// Layout of a start datetime, e.g. `2023-10-06 10:00`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Layout of a calendar date, e.g. `2023-10-06`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd HH:mm` datetime. Date-only and time-only text is rejected.
pub fn parse_datetime(value: &str) -> ParseResult<NaiveDateTime> {
    let value = value.trim();
    let well_formed = value
        .split_once(' ')
        .is_some_and(|(date, time)| is_date_shape(date) && has_digit_groups(time, ':', &[2, 2]));
    if !well_formed {
        return Err(ParseError::InvalidFormat(Field::Datetime));
    }

    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .map_err(|_| ParseError::InvalidFormat(Field::Datetime))
}

/// Parse a `yyyy-MM-dd` date. Text carrying a time part is rejected.
pub fn parse_date(value: &str) -> ParseResult<NaiveDate> {
    let value = value.trim();
    if !is_date_shape(value) {
        return Err(ParseError::InvalidFormat(Field::Datetime));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ParseError::InvalidFormat(Field::Datetime))
}

fn is_date_shape(value: &str) -> bool {
    has_digit_groups(value, '-', &[4, 2, 2])
}
