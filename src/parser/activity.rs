//! Builders for activity records and activity edits.
//!
//! Creation expects the caption first, followed by the required tags of the
//! kind in any order:
//!
//! ```text
//! Morning Run duration/01:30:00 distance/10000 datetime/2023-10-06 10:00 elevation/50
//! ```
//!
//! Edits take a 1-based index followed by any subset of the kind's optional
//! tags, including `caption/`:
//!
//! ```text
//! 2 caption/Evening Run distance/5000
//! ```

use crate::activity::types::{Activity, ActivityChanges, ActivityDetails, ActivityKind};
use crate::parser::datetime::parse_datetime;
use crate::parser::error::{ParseError, ParseResult};
use crate::parser::fields::{
    check_not_empty, parse_distance, parse_duration, parse_elevation, parse_swimming_style,
};
use crate::parser::locator::{locate, LocatedFields};
use crate::parser::tags::{Field, TagTable};

/// Parse the arguments of a create command into a complete activity.
///
/// Missing tags are reported one at a time in the kind's required-field order.
/// Empty values are reported before any value is parsed.
pub fn parse_activity(
    tags: &TagTable,
    kind: ActivityKind,
    arguments: &str,
) -> ParseResult<Activity> {
    let required = kind.required_fields();
    let located = locate(arguments, tags, required);

    if let Some(&field) = required.iter().find(|&&field| !located.contains(field)) {
        return Err(ParseError::MissingField {
            field,
            tag: tags.get(field).to_string(),
        });
    }

    let caption = check_not_empty(Field::Caption, located.leading_text())?;
    for &field in required {
        required_value(&located, field)?;
    }

    let duration = parse_duration(required_value(&located, Field::Duration)?)?;
    let distance = parse_distance(required_value(&located, Field::Distance)?)?;
    let start = parse_datetime(required_value(&located, Field::Datetime)?)?;

    let details = match kind {
        ActivityKind::Plain => ActivityDetails::Plain,
        ActivityKind::Run => ActivityDetails::Run {
            elevation: parse_elevation(required_value(&located, Field::Elevation)?)?,
        },
        ActivityKind::Cycle => ActivityDetails::Cycle {
            elevation: parse_elevation(required_value(&located, Field::Elevation)?)?,
        },
        ActivityKind::Swim => ActivityDetails::Swim {
            style: parse_swimming_style(required_value(&located, Field::SwimmingStyle)?)?,
        },
    };

    let activity = Activity::new(caption.to_string(), duration, distance, start, details);
    tracing::debug!("Parsed new {}", kind);

    Ok(activity)
}

/// Parse the field part of an edit into sparse changes for `kind`.
///
/// Fails with `EmptyEdit` if none of the kind's tags occur. Absent tags leave
/// their field unset; present tags with no value fail with `EmptyField`.
pub fn parse_activity_changes(
    tags: &TagTable,
    kind: ActivityKind,
    arguments: &str,
) -> ParseResult<ActivityChanges> {
    let optional = kind.optional_fields();
    let located = locate(arguments, tags, optional);

    if located.is_empty() {
        return Err(ParseError::EmptyEdit);
    }

    let mut changes = ActivityChanges::default();

    for &field in optional {
        let Some(value) = located.value(field) else {
            continue;
        };
        let value = check_not_empty(field, value)?;

        match field {
            Field::Caption => changes.caption = Some(value.to_string()),
            Field::Duration => changes.duration = Some(parse_duration(value)?),
            Field::Distance => changes.distance = Some(parse_distance(value)?),
            Field::Datetime => changes.start = Some(parse_datetime(value)?),
            Field::Elevation => changes.elevation = Some(parse_elevation(value)?),
            Field::SwimmingStyle => changes.swimming_style = Some(parse_swimming_style(value)?),
            // Goal fields never appear in an activity kind's optional fields.
            Field::Sport | Field::GoalType | Field::Period | Field::Target => {}
        }
    }

    Ok(changes)
}

/// Parse a full edit (`<index> <changes>`) into sparse changes.
pub fn parse_activity_edit(
    tags: &TagTable,
    kind: ActivityKind,
    arguments: &str,
) -> ParseResult<ActivityChanges> {
    let (_, changes) = split_edit(arguments).ok_or(ParseError::InvalidEdit)?;
    parse_activity_changes(tags, kind, changes)
}

/// Parse the index part of an edit.
pub fn parse_edit_index(arguments: &str) -> ParseResult<usize> {
    let arguments = arguments.trim_start();
    let index = split_edit(arguments)
        .map(|(index, _)| index)
        .unwrap_or(arguments);
    parse_index(index)
}

/// Parse a 1-based entry index.
pub fn parse_index(arguments: &str) -> ParseResult<usize> {
    match arguments.trim().parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(ParseError::InvalidIndex),
    }
}

/// Whether a list command asks for the detailed view.
pub fn parse_list_detail(arguments: &str, detail_flag: &str) -> bool {
    arguments.to_lowercase().contains(&detail_flag.to_lowercase())
}

/// Split edit arguments at the first space after the index.
fn split_edit(arguments: &str) -> Option<(&str, &str)> {
    arguments.trim_start().split_once(' ')
}

/// Value of a field already known to be present, checked for emptiness.
fn required_value<'a>(located: &LocatedFields<'a>, field: Field) -> ParseResult<&'a str> {
    check_not_empty(field, located.value(field).unwrap_or(""))
}
