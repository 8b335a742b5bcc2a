//! Unit tests for the activity list and its listing format.

use chrono::{NaiveDate, NaiveTime};
use fitlog::activity::types::{Activity, ActivityDetails, SwimmingStyle};
use fitlog::activity::ActivityList;
use fitlog::parser::ParseError;

fn activity(caption: &str, day: u32, details: ActivityDetails) -> Activity {
    Activity::new(
        caption.to_string(),
        NaiveTime::from_hms_opt(2, 13, 0).unwrap(),
        40460,
        NaiveDate::from_ymd_opt(2023, 10, day)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap(),
        details,
    )
}

fn sample_list() -> ActivityList {
    ActivityList::from_activities(vec![
        activity("Walk", 6, ActivityDetails::Plain),
        activity("Ride", 7, ActivityDetails::Cycle { elevation: 120 }),
        activity(
            "Laps",
            7,
            ActivityDetails::Swim {
                style: SwimmingStyle::Freestyle,
            },
        ),
    ])
}

#[test]
fn test_record_at_is_one_based() {
    let list = sample_list();
    assert_eq!(list.record_at(1).unwrap().caption, "Walk");
    assert_eq!(list.record_at(3).unwrap().caption, "Laps");
    assert_eq!(list.record_at(0), Err(ParseError::IndexOutOfRange(0)));
    assert_eq!(list.record_at(4), Err(ParseError::IndexOutOfRange(4)));
}

#[test]
fn test_replace_and_remove() {
    let mut list = sample_list();

    let old = list
        .replace(2, activity("Commute", 7, ActivityDetails::Cycle { elevation: 5 }))
        .unwrap();
    assert_eq!(old.caption, "Ride");
    assert_eq!(list.record_at(2).unwrap().caption, "Commute");

    let removed = list.remove(1).unwrap();
    assert_eq!(removed.caption, "Walk");
    assert_eq!(list.len(), 2);
    assert_eq!(list.record_at(1).unwrap().caption, "Commute");

    assert!(list.remove(5).is_err());
    assert_eq!(list.len(), 2);
}

#[test]
fn test_find_by_date() {
    let list = sample_list();
    let found = list.find(NaiveDate::from_ymd_opt(2023, 10, 7).unwrap());
    let captions: Vec<&str> = found.iter().map(|a| a.caption.as_str()).collect();
    assert_eq!(captions, vec!["Ride", "Laps"]);

    assert!(list
        .find(NaiveDate::from_ymd_opt(2023, 10, 9).unwrap())
        .is_empty());
}

#[test]
fn test_cycle_summary_line() {
    let ride = activity("Ride", 7, ActivityDetails::Cycle { elevation: 120 });
    assert_eq!(
        ride.to_string(),
        "[Cycle] Ride | Distance: 40.46 km | Speed: 18.25 km/h | Time: 2h 13m | October 7, 2023 at 2:00 PM"
    );
}

#[test]
fn test_swim_summary_shows_style() {
    let swim = activity(
        "Laps",
        7,
        ActivityDetails::Swim {
            style: SwimmingStyle::Freestyle,
        },
    );
    let line = swim.to_string();
    assert!(line.contains("| Style: Freestyle |"));
    assert!(!line.contains("Speed"));
}

#[test]
fn test_detailed_view_lists_elevation() {
    let ride = activity("Ride", 7, ActivityDetails::Cycle { elevation: 120 });
    let detailed = ride.detailed();
    assert!(detailed.contains("Elevation: 120 m"));
    assert!(detailed.contains("Time: 02:13:00"));
}
