//! Applying sparse edits to activities.

use crate::activity::types::{Activity, ActivityChanges, ActivityDetails};
use crate::parser::error::{ParseError, ParseResult};

/// Produce a copy of `activity` with every field set in `changes` overwritten.
///
/// Changes with no fields set are rejected, as are changes to a field the
/// activity's kind does not carry. The original is never modified.
pub fn apply_changes(activity: &Activity, changes: ActivityChanges) -> ParseResult<Activity> {
    if changes.is_empty() {
        return Err(ParseError::EmptyEdit);
    }

    let kind = activity.kind();
    if let Some(field) = changes
        .present_fields()
        .into_iter()
        .find(|&field| !kind.has_field(field))
    {
        return Err(ParseError::UnsupportedChange { field, kind });
    }

    let mut updated = activity.clone();

    if let Some(caption) = changes.caption {
        updated.caption = caption;
    }
    if let Some(duration) = changes.duration {
        updated.duration = duration;
    }
    if let Some(distance) = changes.distance {
        updated.distance = distance;
    }
    if let Some(start) = changes.start {
        updated.start = start;
    }

    match &mut updated.details {
        ActivityDetails::Run { elevation } | ActivityDetails::Cycle { elevation } => {
            if let Some(new_elevation) = changes.elevation {
                *elevation = new_elevation;
            }
        }
        ActivityDetails::Swim { style } => {
            if let Some(new_style) = changes.swimming_style {
                *style = new_style;
            }
        }
        ActivityDetails::Plain => {}
    }

    tracing::debug!("Applied changes to {}", kind);

    Ok(updated)
}
