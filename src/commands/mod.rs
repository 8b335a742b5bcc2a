//! Command keywords and dispatch.
//!
//! A command line is a keyword followed by free-text arguments. Parsing turns
//! it into a `Command`; the `Journal` then executes it.

pub mod journal;

use chrono::NaiveDate;

use crate::activity::types::{Activity, ActivityKind};
use crate::goals::types::ActivityGoal;
use crate::parser::activity::{parse_activity, parse_edit_index, parse_index, parse_list_detail};
use crate::parser::datetime::parse_date;
use crate::parser::error::{ParseError, ParseResult};
use crate::parser::goal::parse_activity_goal;
use crate::parser::tags::TagTable;

pub use journal::{CommandOutput, Journal};

pub const COMMAND_BYE: &str = "bye";
pub const COMMAND_ACTIVITY: &str = "activity";
pub const COMMAND_RUN: &str = "run";
pub const COMMAND_CYCLE: &str = "cycle";
pub const COMMAND_SWIM: &str = "swim";
pub const COMMAND_ACTIVITY_EDIT: &str = "edit-activity";
pub const COMMAND_RUN_EDIT: &str = "edit-run";
pub const COMMAND_CYCLE_EDIT: &str = "edit-cycle";
pub const COMMAND_SWIM_EDIT: &str = "edit-swim";
pub const COMMAND_ACTIVITY_DELETE: &str = "delete-activity";
pub const COMMAND_ACTIVITY_LIST: &str = "list-activity";
pub const COMMAND_ACTIVITY_FIND: &str = "find-activity";
pub const COMMAND_ACTIVITY_GOAL_SET: &str = "set-activity-goal";
pub const COMMAND_ACTIVITY_GOAL_LIST: &str = "list-activity-goal";
pub const COMMAND_ACTIVITY_GOAL_DELETE: &str = "delete-activity-goal";

/// A parsed command, ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddActivity(Activity),
    /// Edit of the entry at `index`; the change text is parsed once the
    /// index is known to exist.
    EditActivity {
        kind: ActivityKind,
        index: usize,
        arguments: String,
    },
    DeleteActivity(usize),
    ListActivities { detailed: bool },
    FindActivities(NaiveDate),
    SetActivityGoal(ActivityGoal),
    ListActivityGoals,
    DeleteActivityGoal(usize),
    Bye,
}

impl Command {
    /// Whether executing this command can change stored data.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::AddActivity(_)
                | Command::EditActivity { .. }
                | Command::DeleteActivity(_)
                | Command::SetActivityGoal(_)
                | Command::DeleteActivityGoal(_)
        )
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Bye)
    }
}

/// Split a command line into its keyword and the (trimmed) remaining text.
pub fn split_command_word_and_args(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args.trim()),
        None => (input, ""),
    }
}

/// Parse one command line.
pub fn parse_command(tags: &TagTable, detail_flag: &str, input: &str) -> ParseResult<Command> {
    let (word, args) = split_command_word_and_args(input);

    let command = match word {
        COMMAND_BYE => Command::Bye,
        COMMAND_ACTIVITY => Command::AddActivity(parse_activity(tags, ActivityKind::Plain, args)?),
        COMMAND_RUN => Command::AddActivity(parse_activity(tags, ActivityKind::Run, args)?),
        COMMAND_CYCLE => Command::AddActivity(parse_activity(tags, ActivityKind::Cycle, args)?),
        COMMAND_SWIM => Command::AddActivity(parse_activity(tags, ActivityKind::Swim, args)?),
        COMMAND_ACTIVITY_EDIT => edit_command(ActivityKind::Plain, args)?,
        COMMAND_RUN_EDIT => edit_command(ActivityKind::Run, args)?,
        COMMAND_CYCLE_EDIT => edit_command(ActivityKind::Cycle, args)?,
        COMMAND_SWIM_EDIT => edit_command(ActivityKind::Swim, args)?,
        COMMAND_ACTIVITY_DELETE => Command::DeleteActivity(parse_index(args)?),
        COMMAND_ACTIVITY_LIST => Command::ListActivities {
            detailed: parse_list_detail(args, detail_flag),
        },
        COMMAND_ACTIVITY_FIND => Command::FindActivities(parse_date(args)?),
        COMMAND_ACTIVITY_GOAL_SET => Command::SetActivityGoal(parse_activity_goal(tags, args)?),
        COMMAND_ACTIVITY_GOAL_LIST => Command::ListActivityGoals,
        COMMAND_ACTIVITY_GOAL_DELETE => Command::DeleteActivityGoal(parse_index(args)?),
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    tracing::debug!("Parsed command {:?}", word);

    Ok(command)
}

fn edit_command(kind: ActivityKind, args: &str) -> ParseResult<Command> {
    Ok(Command::EditActivity {
        kind,
        index: parse_edit_index(args)?,
        arguments: args.to_string(),
    })
}
