//! Builder for activity goals.
//!
//! ```text
//! sport/running type/distance period/weekly target/20000
//! ```

use crate::goals::types::ActivityGoal;
use crate::parser::error::{ParseError, ParseResult};
use crate::parser::fields::{check_not_empty, parse_goal_type, parse_period, parse_sport, parse_target};
use crate::parser::locator::locate;
use crate::parser::tags::{Field, TagTable};

/// Goal tags in the order missing or empty ones are reported.
const GOAL_FIELDS: [Field; 4] = [Field::Sport, Field::GoalType, Field::Period, Field::Target];

/// Parse the arguments of a set-goal command into an activity goal.
pub fn parse_activity_goal(tags: &TagTable, arguments: &str) -> ParseResult<ActivityGoal> {
    let located = locate(arguments, tags, &GOAL_FIELDS);

    let mut values = [""; 4];
    for (slot, &field) in values.iter_mut().zip(GOAL_FIELDS.iter()) {
        let value = located.value(field).ok_or_else(|| ParseError::MissingField {
            field,
            tag: tags.get(field).to_string(),
        })?;
        *slot = value;
    }
    for (value, &field) in values.iter().zip(GOAL_FIELDS.iter()) {
        check_not_empty(field, value)?;
    }

    let [sport, goal_type, period, target] = values;
    let sport = parse_sport(sport)?;
    let goal_type = parse_goal_type(goal_type)?;
    let period = parse_period(period)?;
    let target = parse_target(target)?;
    let goal = ActivityGoal::new(period, goal_type, sport, target);

    tracing::debug!("Parsed activity goal {}", goal);

    Ok(goal)
}
