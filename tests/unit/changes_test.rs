//! Unit tests for building and applying activity edits.

use chrono::{NaiveDate, NaiveTime};
use fitlog::activity::types::{Activity, ActivityChanges, ActivityDetails, SwimmingStyle};
use fitlog::activity::{apply_changes, ActivityKind};
use fitlog::parser::{parse_activity, parse_activity_changes, Field, ParseError, TagTable};

fn morning_run() -> Activity {
    parse_activity(
        &TagTable::default(),
        ActivityKind::Run,
        "Morning Run duration/01:30:00 distance/10000 datetime/2023-10-06 10:00 elevation/50",
    )
    .unwrap()
}

fn pool_swim() -> Activity {
    Activity::new(
        "Pool".to_string(),
        NaiveTime::from_hms_opt(0, 45, 0).unwrap(),
        2000,
        NaiveDate::from_ymd_opt(2023, 10, 8)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap(),
        ActivityDetails::Swim {
            style: SwimmingStyle::Freestyle,
        },
    )
}

#[test]
fn test_single_distance_change_isolated() {
    let tags = TagTable::default();
    let run = morning_run();

    let changes = parse_activity_changes(&tags, ActivityKind::Run, "distance/5000").unwrap();
    let updated = apply_changes(&run, changes).unwrap();

    assert_eq!(updated.distance, 5000);
    assert_eq!(updated.caption, run.caption);
    assert_eq!(updated.duration, run.duration);
    assert_eq!(updated.start, run.start);
    assert_eq!(updated.elevation(), run.elevation());
}

#[test]
fn test_each_single_field_change_isolated() {
    let tags = TagTable::default();
    let run = morning_run();

    let edits = [
        ("caption/Evening Run", Field::Caption),
        ("duration/00:45:00", Field::Duration),
        ("distance/7000", Field::Distance),
        ("datetime/2023-10-07 18:00", Field::Datetime),
        ("elevation/-15", Field::Elevation),
    ];

    for (input, field) in edits {
        let changes = parse_activity_changes(&tags, ActivityKind::Run, input).unwrap();
        assert_eq!(changes.present_fields(), vec![field]);

        let updated = apply_changes(&run, changes).unwrap();
        assert_eq!(updated.caption == run.caption, field != Field::Caption, "{}", input);
        assert_eq!(updated.duration == run.duration, field != Field::Duration, "{}", input);
        assert_eq!(updated.distance == run.distance, field != Field::Distance, "{}", input);
        assert_eq!(updated.start == run.start, field != Field::Datetime, "{}", input);
        assert_eq!(
            updated.elevation() == run.elevation(),
            field != Field::Elevation,
            "{}",
            input
        );
    }
}

#[test]
fn test_multiple_changes_skip_missing_middle_tag() {
    let tags = TagTable::default();
    let run = morning_run();

    let changes = parse_activity_changes(
        &tags,
        ActivityKind::Run,
        "caption/Hill Repeats duration/00:50:00 elevation/220",
    )
    .unwrap();
    let updated = apply_changes(&run, changes).unwrap();

    assert_eq!(updated.caption, "Hill Repeats");
    assert_eq!(updated.duration, NaiveTime::from_hms_opt(0, 50, 0).unwrap());
    assert_eq!(updated.elevation(), Some(220));
    assert_eq!(updated.distance, run.distance);
}

#[test]
fn test_swim_style_change() {
    let tags = TagTable::default();
    let swim = pool_swim();

    let changes = parse_activity_changes(&tags, ActivityKind::Swim, "style/butterfly").unwrap();
    let updated = apply_changes(&swim, changes).unwrap();

    assert_eq!(updated.swimming_style(), Some(SwimmingStyle::Butterfly));
    assert_eq!(updated.distance, swim.distance);
}

#[test]
fn test_mismatched_change_rejected() {
    let run = morning_run();
    let swim = pool_swim();

    let style = ActivityChanges {
        swimming_style: Some(SwimmingStyle::Backstroke),
        ..Default::default()
    };
    assert_eq!(
        apply_changes(&run, style),
        Err(ParseError::UnsupportedChange {
            field: Field::SwimmingStyle,
            kind: ActivityKind::Run,
        })
    );

    let elevation = ActivityChanges {
        elevation: Some(10),
        ..Default::default()
    };
    assert_eq!(
        apply_changes(&swim, elevation),
        Err(ParseError::UnsupportedChange {
            field: Field::Elevation,
            kind: ActivityKind::Swim,
        })
    );
}

#[test]
fn test_empty_changes_rejected() {
    let run = morning_run();
    assert_eq!(
        apply_changes(&run, ActivityChanges::default()),
        Err(ParseError::EmptyEdit)
    );
}

#[test]
fn test_empty_tag_value_rejected_in_edit() {
    let tags = TagTable::default();
    assert_eq!(
        parse_activity_changes(&tags, ActivityKind::Run, "distance/ elevation/10"),
        Err(ParseError::EmptyField(Field::Distance))
    );
}
