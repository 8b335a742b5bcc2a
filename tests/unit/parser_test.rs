//! Unit tests for the tagged argument parser.

use chrono::{NaiveDate, NaiveTime, Timelike};
use fitlog::activity::types::{ActivityDetails, ActivityKind, SwimmingStyle};
use fitlog::goals::types::{GoalType, Period, Sport};
use fitlog::parser::{
    locate, parse_activity, parse_activity_changes, parse_activity_goal, parse_index, Field,
    ParseError, TagTable,
};

const RUN_PERMUTATIONS: [&str; 4] = [
    "Morning Run duration/01:30:00 distance/10000 datetime/2023-10-06 10:00 elevation/50",
    "Morning Run elevation/50 datetime/2023-10-06 10:00 distance/10000 duration/01:30:00",
    "Morning Run distance/10000 elevation/50 duration/01:30:00 datetime/2023-10-06 10:00",
    "  Morning Run   datetime/2023-10-06 10:00   duration/01:30:00 elevation/50 distance/10000  ",
];

#[test]
fn test_run_fields_independent_of_tag_order() {
    let tags = TagTable::default();

    for input in RUN_PERMUTATIONS {
        let run = parse_activity(&tags, ActivityKind::Run, input).unwrap();
        assert_eq!(run.caption, "Morning Run", "caption for {:?}", input);
        assert_eq!(run.duration, NaiveTime::from_hms_opt(1, 30, 0).unwrap());
        assert_eq!(run.distance, 10000);
        assert_eq!(
            run.start,
            NaiveDate::from_ymd_opt(2023, 10, 6)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
        assert_eq!(run.details, ActivityDetails::Run { elevation: 50 });
    }
}

#[test]
fn test_plain_activity_values_recovered() {
    let tags = TagTable::default();
    let activity = parse_activity(
        &tags,
        ActivityKind::Plain,
        "Yoga session duration/01:30:00 distance/10000 datetime/2023-10-06 10:00",
    )
    .unwrap();

    assert_eq!(activity.caption, "Yoga session");
    assert_eq!(activity.duration.format("%H:%M:%S").to_string(), "01:30:00");
    assert_eq!(activity.distance.to_string(), "10000");
    assert_eq!(activity.start.format("%Y-%m-%d %H:%M").to_string(), "2023-10-06 10:00");
}

#[test]
fn test_empty_edit_for_every_kind() {
    let tags = TagTable::default();
    let kinds = [
        ActivityKind::Plain,
        ActivityKind::Run,
        ActivityKind::Cycle,
        ActivityKind::Swim,
    ];

    for kind in kinds {
        for input in ["", "   ", "nothing to see here", "sport/running target/5"] {
            assert_eq!(
                parse_activity_changes(&tags, kind, input),
                Err(ParseError::EmptyEdit),
                "{:?} with {:?}",
                kind,
                input
            );
        }
    }
}

#[test]
fn test_negative_distance_rejected_with_any_other_fields() {
    let tags = TagTable::default();

    assert_eq!(
        parse_activity(
            &tags,
            ActivityKind::Plain,
            "Walk duration/00:10:00 distance/-5 datetime/2023-10-06 10:00",
        ),
        Err(ParseError::NegativeValue(Field::Distance))
    );
    assert_eq!(
        parse_activity(
            &tags,
            ActivityKind::Swim,
            "Laps style/freestyle distance/-1500 duration/00:30:00 datetime/2023-10-06 10:00",
        ),
        Err(ParseError::NegativeValue(Field::Distance))
    );
    assert_eq!(
        parse_activity_changes(&tags, ActivityKind::Cycle, "distance/-1 caption/Ride"),
        Err(ParseError::NegativeValue(Field::Distance))
    );
    assert_eq!(
        parse_activity_goal(&tags, "sport/running type/distance period/weekly target/-20"),
        Err(ParseError::NegativeValue(Field::Target))
    );
}

#[test]
fn test_negative_elevation_accepted() {
    let tags = TagTable::default();
    let ride = parse_activity(
        &tags,
        ActivityKind::Cycle,
        "Descent duration/00:45:00 distance/20000 datetime/2023-10-06 10:00 elevation/-300",
    )
    .unwrap();

    assert_eq!(ride.elevation(), Some(-300));
}

#[test]
fn test_distance_span_runs_to_end_without_datetime() {
    let tags = TagTable::default();
    let located = locate(
        "duration/01:00:00 distance/5000",
        &tags,
        ActivityKind::Plain.required_fields(),
    );

    assert_eq!(located.value(Field::Duration), Some("01:00:00"));
    assert_eq!(located.value(Field::Distance), Some("5000"));
    assert_eq!(located.value(Field::Datetime), None);

    let changes = parse_activity_changes(
        &tags,
        ActivityKind::Plain,
        "duration/01:00:00 distance/5000",
    )
    .unwrap();
    assert_eq!(changes.distance, Some(5000));
    assert_eq!(changes.duration.map(|d| d.hour()), Some(1));
}

#[test]
fn test_run_without_arguments_reports_duration_first() {
    let tags = TagTable::default();
    assert_eq!(
        parse_activity(&tags, ActivityKind::Run, ""),
        Err(ParseError::MissingField {
            field: Field::Duration,
            tag: "duration/".to_string(),
        })
    );
}

#[test]
fn test_missing_fields_reported_in_priority_order() {
    let tags = TagTable::default();

    assert_eq!(
        parse_activity(&tags, ActivityKind::Run, "Jog duration/00:30:00 elevation/10"),
        Err(ParseError::MissingField {
            field: Field::Distance,
            tag: "distance/".to_string(),
        })
    );
    assert_eq!(
        parse_activity(
            &tags,
            ActivityKind::Swim,
            "Laps duration/00:30:00 distance/1000 datetime/2023-10-06 07:00",
        ),
        Err(ParseError::MissingField {
            field: Field::SwimmingStyle,
            tag: "style/".to_string(),
        })
    );
}

#[test]
fn test_format_errors() {
    let tags = TagTable::default();

    assert_eq!(
        parse_activity(
            &tags,
            ActivityKind::Plain,
            "Walk duration/half an hour distance/100 datetime/2023-10-06 10:00",
        ),
        Err(ParseError::InvalidFormat(Field::Duration))
    );
    assert_eq!(
        parse_activity(
            &tags,
            ActivityKind::Plain,
            "Walk duration/00:30 distance/100 datetime/2023-10-06",
        ),
        Err(ParseError::InvalidFormat(Field::Datetime))
    );
    assert_eq!(
        parse_activity(
            &tags,
            ActivityKind::Swim,
            "Laps duration/00:30:00 distance/100 datetime/2023-10-06 10:00 style/doggy",
        ),
        Err(ParseError::InvalidEnum(Field::SwimmingStyle))
    );
}

#[test]
fn test_first_malformed_value_wins() {
    let tags = TagTable::default();

    assert_eq!(
        parse_activity(
            &tags,
            ActivityKind::Plain,
            "Walk duration/abc distance/x datetime/2023-10-06 10:00",
        ),
        Err(ParseError::InvalidFormat(Field::Duration))
    );
    assert_eq!(
        parse_activity(
            &tags,
            ActivityKind::Swim,
            "Laps style/doggy datetime/later distance/1500 duration/00:30:00",
        ),
        Err(ParseError::InvalidFormat(Field::Datetime))
    );
    assert_eq!(
        parse_activity_goal(&tags, "target/-1 period/hourly type/distance sport/golf"),
        Err(ParseError::InvalidEnum(Field::Sport))
    );
    assert_eq!(
        parse_activity_goal(&tags, "target/-1 period/hourly type/distance sport/running"),
        Err(ParseError::InvalidEnum(Field::Period))
    );
}

#[test]
fn test_enum_values_case_insensitive() {
    let tags = TagTable::default();

    let swim = parse_activity(
        &tags,
        ActivityKind::Swim,
        "Laps duration/00:30:00 distance/100 datetime/2023-10-06 10:00 style/BackStroke",
    )
    .unwrap();
    assert_eq!(swim.swimming_style(), Some(SwimmingStyle::Backstroke));

    let goal =
        parse_activity_goal(&tags, "sport/CYCLING type/Duration period/Yearly target/6000").unwrap();
    assert_eq!(goal.sport, Sport::Cycling);
    assert_eq!(goal.goal_type, GoalType::Duration);
    assert_eq!(goal.period, Period::Yearly);
    assert_eq!(goal.target, 6000);
}

#[test]
fn test_goal_missing_and_empty_fields() {
    let tags = TagTable::default();

    assert_eq!(
        parse_activity_goal(&tags, "type/distance period/weekly target/20"),
        Err(ParseError::MissingField {
            field: Field::Sport,
            tag: "sport/".to_string(),
        })
    );
    assert_eq!(
        parse_activity_goal(&tags, "sport/running type/ period/weekly target/20"),
        Err(ParseError::EmptyField(Field::GoalType))
    );
    assert_eq!(
        parse_activity_goal(&tags, "sport/running type/distance period/fortnightly target/20"),
        Err(ParseError::InvalidEnum(Field::Period))
    );
}

#[test]
fn test_custom_tag_table() {
    let tags = TagTable {
        duration: "time=".to_string(),
        distance: "dist=".to_string(),
        datetime: "at=".to_string(),
        ..TagTable::default()
    };

    let activity = parse_activity(
        &tags,
        ActivityKind::Plain,
        "Stroll dist=800 at=2023-10-06 18:30 time=00:15:00",
    )
    .unwrap();
    assert_eq!(activity.caption, "Stroll");
    assert_eq!(activity.distance, 800);

    assert_eq!(
        parse_activity(&tags, ActivityKind::Plain, "Stroll duration/00:15:00"),
        Err(ParseError::MissingField {
            field: Field::Duration,
            tag: "time=".to_string(),
        })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ParseError::MissingField {
            field: Field::Duration,
            tag: "duration/".to_string(),
        }
        .to_string(),
        "Please specify the duration using \"duration/\"!"
    );
    assert_eq!(
        ParseError::NegativeValue(Field::Target).to_string(),
        "The target cannot be negative!"
    );
    assert_eq!(
        ParseError::IndexOutOfRange(4).to_string(),
        "There is no entry at index 4!"
    );
}

#[test]
fn test_parse_index_rejects_non_positive() {
    assert_eq!(parse_index("2"), Ok(2));
    assert_eq!(parse_index("0"), Err(ParseError::InvalidIndex));
    assert_eq!(parse_index(""), Err(ParseError::InvalidIndex));
}
