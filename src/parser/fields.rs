//! Field validators and scalar parsers.
//!
//! Validators take the trimmed value text of one field. Three failure modes are
//! kept apart: the tag is missing (checked by the builders), the value is empty
//! (`EmptyField`), and the value cannot be read (`InvalidFormat`,
//! `NegativeValue`, `InvalidEnum`).

use chrono::NaiveTime;

use crate::activity::types::SwimmingStyle;
use crate::goals::types::{GoalType, Period, Sport};
use crate::parser::error::{ParseError, ParseResult};
use crate::parser::tags::Field;

/// Accepted duration layouts with their digit group widths, tried in order.
const DURATION_FORMATS: [(&str, &[usize]); 2] = [("%H:%M:%S", &[2, 2, 2]), ("%H:%M", &[2, 2])];

/// Reject a value that trimmed down to nothing.
pub fn check_not_empty(field: Field, value: &str) -> ParseResult<&str> {
    if value.is_empty() {
        return Err(ParseError::EmptyField(field));
    }
    Ok(value)
}

/// Whether `value` is made of `separator`-delimited ASCII digit groups of
/// exactly the given widths. chrono alone also accepts single-digit fields.
pub(crate) fn has_digit_groups(value: &str, separator: char, widths: &[usize]) -> bool {
    let groups: Vec<&str> = value.split(separator).collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, &width)| group.len() == width && group.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse a duration written as a clock time (`HH:mm:ss` or `HH:mm`).
pub fn parse_duration(value: &str) -> ParseResult<NaiveTime> {
    DURATION_FORMATS
        .iter()
        .filter(|(_, widths)| has_digit_groups(value, ':', widths))
        .find_map(|(format, _)| NaiveTime::parse_from_str(value, format).ok())
        .ok_or(ParseError::InvalidFormat(Field::Duration))
}

/// Parse a distance in meters.
pub fn parse_distance(value: &str) -> ParseResult<u32> {
    parse_non_negative(Field::Distance, value)
}

/// Parse an elevation in meters. Negative values describe a net descent.
pub fn parse_elevation(value: &str) -> ParseResult<i32> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidFormat(Field::Elevation))
}

/// Parse a goal target.
pub fn parse_target(value: &str) -> ParseResult<u32> {
    parse_non_negative(Field::Target, value)
}

pub fn parse_swimming_style(value: &str) -> ParseResult<SwimmingStyle> {
    SwimmingStyle::from_name(value).ok_or(ParseError::InvalidEnum(Field::SwimmingStyle))
}

pub fn parse_sport(value: &str) -> ParseResult<Sport> {
    Sport::from_name(value).ok_or(ParseError::InvalidEnum(Field::Sport))
}

pub fn parse_goal_type(value: &str) -> ParseResult<GoalType> {
    GoalType::from_name(value).ok_or(ParseError::InvalidEnum(Field::GoalType))
}

pub fn parse_period(value: &str) -> ParseResult<Period> {
    Period::from_name(value).ok_or(ParseError::InvalidEnum(Field::Period))
}

/// Parse a base-10 integer, rejecting negatives with a distinct error.
fn parse_non_negative(field: Field, value: &str) -> ParseResult<u32> {
    let parsed: i32 = value
        .parse()
        .map_err(|_| ParseError::InvalidFormat(field))?;

    if parsed < 0 {
        return Err(ParseError::NegativeValue(field));
    }

    Ok(parsed as u32)
}
