//! Activity record types.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::parser::tags::Field;

/// Display layout for start datetimes, e.g. `October 6, 2023 at 10:00 AM`.
pub const DISPLAY_DATETIME_FORMAT: &str = "%B %-d, %Y at %-I:%M %p";

/// Kind of activity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// General activity without sport-specific data
    Plain,
    Run,
    Cycle,
    Swim,
}

impl ActivityKind {
    /// Tags that must be present to create a record of this kind, in the
    /// order missing tags are reported.
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            ActivityKind::Plain => &[Field::Duration, Field::Distance, Field::Datetime],
            ActivityKind::Run | ActivityKind::Cycle => &[
                Field::Duration,
                Field::Distance,
                Field::Datetime,
                Field::Elevation,
            ],
            ActivityKind::Swim => &[
                Field::Duration,
                Field::Distance,
                Field::Datetime,
                Field::SwimmingStyle,
            ],
        }
    }

    /// Tags an edit of this kind may carry.
    pub fn optional_fields(&self) -> &'static [Field] {
        match self {
            ActivityKind::Plain => &[
                Field::Caption,
                Field::Duration,
                Field::Distance,
                Field::Datetime,
            ],
            ActivityKind::Run | ActivityKind::Cycle => &[
                Field::Caption,
                Field::Duration,
                Field::Distance,
                Field::Datetime,
                Field::Elevation,
            ],
            ActivityKind::Swim => &[
                Field::Caption,
                Field::Duration,
                Field::Distance,
                Field::Datetime,
                Field::SwimmingStyle,
            ],
        }
    }

    /// Whether records of this kind carry `field`.
    pub fn has_field(&self, field: Field) -> bool {
        self.optional_fields().contains(&field)
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityKind::Plain => "activity",
            ActivityKind::Run => "run",
            ActivityKind::Cycle => "cycle",
            ActivityKind::Swim => "swim",
        }
    }

    /// Bracketed label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Plain => "[Activity]",
            ActivityKind::Run => "[Run]",
            ActivityKind::Cycle => "[Cycle]",
            ActivityKind::Swim => "[Swim]",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Swimming stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwimmingStyle {
    Butterfly,
    Backstroke,
    Breaststroke,
    Freestyle,
}

impl SwimmingStyle {
    /// Match a style name case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "butterfly" => Some(SwimmingStyle::Butterfly),
            "backstroke" => Some(SwimmingStyle::Backstroke),
            "breaststroke" => Some(SwimmingStyle::Breaststroke),
            "freestyle" => Some(SwimmingStyle::Freestyle),
            _ => None,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SwimmingStyle::Butterfly => "Butterfly",
            SwimmingStyle::Backstroke => "Backstroke",
            SwimmingStyle::Breaststroke => "Breaststroke",
            SwimmingStyle::Freestyle => "Freestyle",
        }
    }
}

impl std::fmt::Display for SwimmingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Sport-specific part of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ActivityDetails {
    Plain,
    /// Elevation is the net climb in meters (negative for a descent)
    Run { elevation: i32 },
    Cycle { elevation: i32 },
    Swim { style: SwimmingStyle },
}

impl ActivityDetails {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityDetails::Plain => ActivityKind::Plain,
            ActivityDetails::Run { .. } => ActivityKind::Run,
            ActivityDetails::Cycle { .. } => ActivityKind::Cycle,
            ActivityDetails::Swim { .. } => ActivityKind::Swim,
        }
    }
}

/// A recorded activity.
///
/// `duration` is stored as a clock time (`HH:mm:ss`), so it cannot exceed
/// 23:59:59.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description
    pub caption: String,
    /// Moving time
    pub duration: NaiveTime,
    /// Distance in meters
    pub distance: u32,
    /// When the activity started
    pub start: NaiveDateTime,
    /// Sport-specific data
    pub details: ActivityDetails,
}

impl Activity {
    pub fn new(
        caption: String,
        duration: NaiveTime,
        distance: u32,
        start: NaiveDateTime,
        details: ActivityDetails,
    ) -> Self {
        Self {
            caption,
            duration,
            distance,
            start,
            details,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        self.details.kind()
    }

    /// Net elevation for runs and cycles.
    pub fn elevation(&self) -> Option<i32> {
        match self.details {
            ActivityDetails::Run { elevation } | ActivityDetails::Cycle { elevation } => {
                Some(elevation)
            }
            _ => None,
        }
    }

    /// Stroke for swims.
    pub fn swimming_style(&self) -> Option<SwimmingStyle> {
        match self.details {
            ActivityDetails::Swim { style } => Some(style),
            _ => None,
        }
    }

    /// Duration in whole seconds.
    pub fn duration_seconds(&self) -> u32 {
        self.duration.num_seconds_from_midnight()
    }

    /// Distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance as f64 / 1000.0
    }

    /// Average speed in km/h (0 for a zero duration).
    pub fn average_speed_kmh(&self) -> f64 {
        let seconds = self.duration_seconds();
        if seconds == 0 {
            return 0.0;
        }
        self.distance_km() / (seconds as f64 / 3600.0)
    }

    /// Duration as `1h 30m`.
    pub fn format_duration(&self) -> String {
        format!("{}h {}m", self.duration.hour(), self.duration.minute())
    }

    /// Start datetime as `October 6, 2023 at 10:00 AM`.
    pub fn format_start(&self) -> String {
        self.start.format(DISPLAY_DATETIME_FORMAT).to_string()
    }

    /// Multi-line view with every field.
    pub fn detailed(&self) -> String {
        let mut lines = vec![
            format!(
                "{} {} - {}",
                self.kind().label(),
                self.caption,
                self.format_start()
            ),
            format!("    Distance: {:.2} km", self.distance_km()),
            format!("    Time: {}", self.duration.format("%H:%M:%S")),
        ];

        match self.details {
            ActivityDetails::Plain => {}
            ActivityDetails::Run { elevation } | ActivityDetails::Cycle { elevation } => {
                lines.push(format!("    Speed: {:.2} km/h", self.average_speed_kmh()));
                lines.push(format!("    Elevation: {} m", elevation));
            }
            ActivityDetails::Swim { style } => {
                lines.push(format!("    Style: {}", style));
            }
        }

        lines.join("\n")
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} | Distance: {:.2} km",
            self.kind().label(),
            self.caption,
            self.distance_km()
        )?;

        match self.details {
            ActivityDetails::Plain => {}
            ActivityDetails::Run { .. } | ActivityDetails::Cycle { .. } => {
                write!(f, " | Speed: {:.2} km/h", self.average_speed_kmh())?;
            }
            ActivityDetails::Swim { style } => {
                write!(f, " | Style: {}", style)?;
            }
        }

        write!(
            f,
            " | Time: {} | {}",
            self.format_duration(),
            self.format_start()
        )
    }
}

/// Sparse update for an activity. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityChanges {
    pub caption: Option<String>,
    pub duration: Option<NaiveTime>,
    pub distance: Option<u32>,
    pub start: Option<NaiveDateTime>,
    pub elevation: Option<i32>,
    pub swimming_style: Option<SwimmingStyle>,
}

impl ActivityChanges {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// Fields that carry a value.
    pub fn present_fields(&self) -> Vec<Field> {
        [
            (Field::Caption, self.caption.is_some()),
            (Field::Duration, self.duration.is_some()),
            (Field::Distance, self.distance.is_some()),
            (Field::Datetime, self.start.is_some()),
            (Field::Elevation, self.elevation.is_some()),
            (Field::SwimmingStyle, self.swimming_style.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }
}
