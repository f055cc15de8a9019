use chrono::Duration;
use tempfile::tempdir;

mod common;
use common::{Day, date, time, write_sample_schedule, write_schedule};

use shiftbot::schedule::extract::{
    DAY_COLUMN_WIDTH, MONDAY_COLUMN_OFFSET, ROW_OFFSET, day_coordinates,
};
use shiftbot::schedule::loader::load_table;

#[test]
fn coordinates_per_weekday() {
    let first = date(2020, 2, 10); // a Monday

    for weekday in 0..5usize {
        let day = first + Duration::days(weekday as i64);
        assert_eq!(
            day_coordinates(first, day),
            (ROW_OFFSET, MONDAY_COLUMN_OFFSET + weekday * DAY_COLUMN_WIDTH),
            "week 0, weekday {}",
            weekday
        );

        let next_week = day + Duration::days(7);
        assert_eq!(
            day_coordinates(first, next_week),
            (
                1 + ROW_OFFSET,
                MONDAY_COLUMN_OFFSET + weekday * DAY_COLUMN_WIDTH
            ),
            "week 1, weekday {}",
            weekday
        );
    }
}

#[test]
fn monday_week_zero_example() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.xlsx");
    write_sample_schedule(&path);

    let table = load_table(&path).unwrap();
    let schedule = shiftbot::schedule::schedule_for_day(&table, date(2020, 2, 10));

    assert_eq!(schedule.begin(), Some(time("09:00")));
    assert_eq!(schedule.end(), Some(time("18:00")));
    assert_eq!(schedule.duration(), Some(Duration::hours(9)));
    assert_eq!(schedule.additional_duration(), None);
}

#[test]
fn two_weeks_of_durations() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.xlsx");
    write_sample_schedule(&path);

    let table = load_table(&path).unwrap();

    let expected: [Option<Duration>; 12] = [
        Some(Duration::hours(9)),                      // Mon
        Some(Duration::hours(9)),                      // Tue
        None,                                          // Wed
        None,                                          // Thu
        Some(Duration::hours(9)),                      // Fri
        None,                                          // Sat
        None,                                          // Sun
        Some(Duration::hours(4) + Duration::minutes(50)), // Mon
        Some(Duration::hours(6) + Duration::minutes(20)), // Tue
        Some(Duration::hours(4) + Duration::minutes(40)), // Wed
        None,                                          // Thu
        Some(Duration::hours(9)),                      // Fri
    ];

    for (i, valid) in expected.iter().enumerate() {
        let day = date(2020, 2, 10) + Duration::days(i as i64);
        let schedule = shiftbot::schedule::schedule_for_day(&table, day);

        assert_eq!(
            schedule.duration(),
            *valid,
            "duration mismatch on {} ({})",
            day,
            day.format("%A")
        );
        assert_eq!(schedule.additional_duration(), None, "on {}", day);
    }
}

#[test]
fn weekends_and_out_of_range_are_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.xlsx");
    write_sample_schedule(&path);

    let table = load_table(&path).unwrap();

    for day in [
        date(2020, 2, 15), // Saturday
        date(2020, 2, 16), // Sunday
        date(2020, 2, 9),  // before first day
        date(2020, 6, 1),  // after last day
        date(1999, 1, 1),
    ] {
        let schedule = shiftbot::schedule::schedule_for_day(&table, day);
        assert_eq!(schedule.begin(), None, "on {}", day);
        assert_eq!(schedule.end(), None, "on {}", day);
        assert_eq!(schedule.additional_begin(), None, "on {}", day);
        assert_eq!(schedule.additional_end(), None, "on {}", day);
    }
}

#[test]
fn secondary_shift_is_read_from_the_last_two_slots() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.xlsx");

    write_schedule(
        &path,
        date(2020, 2, 10),
        date(2020, 2, 14),
        &[Day::full(date(2020, 2, 12), "08:00", "12:00", "16:00", "20:30")],
    );

    let table = load_table(&path).unwrap();
    let schedule = shiftbot::schedule::schedule_for_day(&table, date(2020, 2, 12));

    assert_eq!(schedule.duration(), Some(Duration::hours(4)));
    assert_eq!(
        schedule.additional_duration(),
        Some(Duration::hours(4) + Duration::minutes(30))
    );
    assert_eq!(schedule.additional_begin(), Some(time("16:00")));
    assert_eq!(schedule.additional_end(), Some(time("20:30")));
}

#[test]
fn half_filled_pairs_read_as_absent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.xlsx");

    // Begin without end, and an additional end without an additional begin:
    // the cursor still advances one column per slot, and both half-pairs
    // normalize to absent.
    write_schedule(
        &path,
        date(2020, 2, 10),
        date(2020, 2, 14),
        &[Day {
            date: date(2020, 2, 13),
            slots: [Some("09:00"), None, None, Some("20:00")],
        }],
    );

    let table = load_table(&path).unwrap();
    let schedule = shiftbot::schedule::schedule_for_day(&table, date(2020, 2, 13));

    assert_eq!(schedule.begin(), None);
    assert_eq!(schedule.end(), None);
    assert_eq!(schedule.duration(), None);
    assert_eq!(schedule.additional_begin(), None);
    assert_eq!(schedule.additional_end(), None);
    assert_eq!(schedule.additional_duration(), None);
}
