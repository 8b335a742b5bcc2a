//! Journal state and command execution.

use crate::activity::changes::apply_changes;
use crate::activity::list::ActivityList;
use crate::activity::types::{Activity, ActivityKind};
use crate::goals::types::ActivityGoal;
use crate::parser::activity::parse_activity_edit;
use crate::parser::error::{ParseError, ParseResult};
use crate::parser::tags::TagTable;

use super::Command;

/// Lines to show the user after a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub lines: Vec<String>,
}

impl CommandOutput {
    fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

/// All recorded activities and goals.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    activities: ActivityList,
    goals: Vec<ActivityGoal>,
}

impl Journal {
    pub fn new(activities: ActivityList, goals: Vec<ActivityGoal>) -> Self {
        Self { activities, goals }
    }

    pub fn activities(&self) -> &ActivityList {
        &self.activities
    }

    pub fn goals(&self) -> &[ActivityGoal] {
        &self.goals
    }

    /// Execute a command. On error the journal is left unchanged.
    pub fn execute(&mut self, tags: &TagTable, command: Command) -> ParseResult<CommandOutput> {
        match command {
            Command::AddActivity(activity) => Ok(self.add_activity(activity)),
            Command::EditActivity {
                kind,
                index,
                arguments,
            } => self.edit_activity(tags, kind, index, &arguments),
            Command::DeleteActivity(index) => {
                let removed = self.activities.remove(index)?;
                Ok(CommandOutput::new(vec![
                    "Gotcha, I've deleted this activity:".to_string(),
                    format!("  {}", removed),
                    self.activity_count_line(),
                ]))
            }
            Command::ListActivities { detailed } => Ok(self.list_activities(detailed)),
            Command::FindActivities(date) => {
                let mut lines = vec![format!("These are the activities on {}:", date)];
                lines.extend(self.activities.find(date).iter().map(|a| format!("  {}", a)));
                Ok(CommandOutput::new(lines))
            }
            Command::SetActivityGoal(goal) => {
                self.goals.push(goal);
                Ok(CommandOutput::new(vec![
                    "Alright, I've added this activity goal:".to_string(),
                    format!("  {}", goal),
                ]))
            }
            Command::ListActivityGoals => {
                let mut lines = vec!["These are your activity goals:".to_string()];
                lines.extend(
                    self.goals
                        .iter()
                        .enumerate()
                        .map(|(i, goal)| format!("  {}. {}", i + 1, goal)),
                );
                Ok(CommandOutput::new(lines))
            }
            Command::DeleteActivityGoal(index) => {
                if index == 0 || index > self.goals.len() {
                    return Err(ParseError::IndexOutOfRange(index));
                }
                let removed = self.goals.remove(index - 1);
                Ok(CommandOutput::new(vec![
                    "Alright, I've deleted this activity goal:".to_string(),
                    format!("  {}", removed),
                ]))
            }
            Command::Bye => Ok(CommandOutput::new(vec![
                "Bye. Hope to see you again soon!".to_string(),
            ])),
        }
    }

    fn add_activity(&mut self, activity: Activity) -> CommandOutput {
        let line = format!("  {}", activity);
        self.activities.add(activity);
        CommandOutput::new(vec![
            "Well done! I've added this activity:".to_string(),
            line,
            self.activity_count_line(),
        ])
    }

    /// Look up the entry, check its kind, build the changes, apply them and
    /// only then store the result.
    fn edit_activity(
        &mut self,
        tags: &TagTable,
        kind: ActivityKind,
        index: usize,
        arguments: &str,
    ) -> ParseResult<CommandOutput> {
        let current = self.activities.record_at(index)?;

        // edit-activity changes only the shared fields, so it fits every kind.
        if kind != ActivityKind::Plain && current.kind() != kind {
            return Err(ParseError::KindMismatch {
                expected: kind,
                found: current.kind(),
            });
        }

        let changes = parse_activity_edit(tags, kind, arguments)?;
        let updated = apply_changes(current, changes)?;
        let line = format!("  {}", updated);
        self.activities.replace(index, updated)?;

        tracing::debug!("Edited activity {}", index);

        Ok(CommandOutput::new(vec![
            "Ok, I've updated this activity:".to_string(),
            line,
        ]))
    }

    fn list_activities(&self, detailed: bool) -> CommandOutput {
        let mut lines = vec!["These are the activities you have tracked so far:".to_string()];

        for (i, activity) in self.activities.iter().enumerate() {
            if detailed {
                lines.push(format!("{}. {}", i + 1, activity.detailed()));
            } else {
                lines.push(format!("{}. {}", i + 1, activity));
            }
        }

        CommandOutput::new(lines)
    }

    fn activity_count_line(&self) -> String {
        match self.activities.len() {
            1 => "Now you have tracked your first activity. This is just the beginning!".to_string(),
            n => format!("Now you have tracked a total of {} activities. Keep pushing!", n),
        }
    }
}
