//! Tag table for tagged free-text arguments.
//!
//! A tag is a literal token such as `duration/` that marks the start of a
//! field's value inside a command's argument text. Tags are matched verbatim
//! and case-sensitively.

use serde::{Deserialize, Serialize};

/// A field that can be addressed by a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Caption,
    Duration,
    Distance,
    Datetime,
    Elevation,
    SwimmingStyle,
    Sport,
    GoalType,
    Period,
    Target,
}

impl Field {
    /// Human-readable name used in error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Caption => "caption",
            Field::Duration => "duration",
            Field::Distance => "distance",
            Field::Datetime => "datetime",
            Field::Elevation => "elevation",
            Field::SwimmingStyle => "swimming style",
            Field::Sport => "sport",
            Field::GoalType => "goal type",
            Field::Period => "period",
            Field::Target => "target",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Mapping from each field to the separator token that introduces it.
///
/// Built once at startup (defaults, optionally overridden from `config.toml`)
/// and passed by reference into every parse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagTable {
    pub caption: String,
    pub duration: String,
    pub distance: String,
    pub datetime: String,
    pub elevation: String,
    pub swimming_style: String,
    pub sport: String,
    pub goal_type: String,
    pub period: String,
    pub target: String,
}

impl Default for TagTable {
    fn default() -> Self {
        Self {
            caption: "caption/".to_string(),
            duration: "duration/".to_string(),
            distance: "distance/".to_string(),
            datetime: "datetime/".to_string(),
            elevation: "elevation/".to_string(),
            swimming_style: "style/".to_string(),
            sport: "sport/".to_string(),
            goal_type: "type/".to_string(),
            period: "period/".to_string(),
            target: "target/".to_string(),
        }
    }
}

impl TagTable {
    /// Get the separator token for a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Caption => &self.caption,
            Field::Duration => &self.duration,
            Field::Distance => &self.distance,
            Field::Datetime => &self.datetime,
            Field::Elevation => &self.elevation,
            Field::SwimmingStyle => &self.swimming_style,
            Field::Sport => &self.sport,
            Field::GoalType => &self.goal_type,
            Field::Period => &self.period,
            Field::Target => &self.target,
        }
    }

    fn entries(&self) -> [(Field, &str); 10] {
        [
            (Field::Caption, self.caption.as_str()),
            (Field::Duration, self.duration.as_str()),
            (Field::Distance, self.distance.as_str()),
            (Field::Datetime, self.datetime.as_str()),
            (Field::Elevation, self.elevation.as_str()),
            (Field::SwimmingStyle, self.swimming_style.as_str()),
            (Field::Sport, self.sport.as_str()),
            (Field::GoalType, self.goal_type.as_str()),
            (Field::Period, self.period.as_str()),
            (Field::Target, self.target.as_str()),
        ]
    }

    /// Check that every token is non-empty and that no two fields share a token.
    pub fn validate(&self) -> Result<(), String> {
        let entries = self.entries();

        for (i, (field, token)) in entries.iter().enumerate() {
            if token.trim().is_empty() {
                return Err(format!("tag for {} is empty", field));
            }
            if let Some((other, _)) = entries[i + 1..].iter().find(|(_, t)| t == token) {
                return Err(format!(
                    "tag \"{}\" is used by both {} and {}",
                    token, field, other
                ));
            }
        }

        Ok(())
    }
}
