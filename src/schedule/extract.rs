//! Extraction engine: maps a calendar date onto the fixed weekly grid and
//! reads the day's shift times.
//!
//! The spreadsheet encodes one week per row and four columns per weekday
//! (begin, end, additional begin, additional end), so row selection is pure
//! arithmetic on elapsed weeks and column selection pure arithmetic on the
//! weekday. No searching.

use chrono::NaiveDate;

use crate::schedule::response::DaySchedule;
use crate::schedule::table::ScheduleTable;
use crate::utils::date::{is_weekend, iso_weekday};

/// Column of Monday's begin slot.
pub const MONDAY_COLUMN_OFFSET: usize = 10;

/// Rows between the top of the sheet and week zero.
pub const ROW_OFFSET: usize = 1;

/// Columns occupied by one weekday.
pub const DAY_COLUMN_WIDTH: usize = 4;

/// Schedule for `date`, all fields absent when the date is a weekend or
/// outside the table's validity window. Total: never fails on any input.
pub fn schedule_for_day(table: &ScheduleTable, date: NaiveDate) -> DaySchedule {
    if is_weekend(date) || date < table.first_day() || date > table.last_day() {
        return DaySchedule::empty();
    }

    let (row, column) = day_coordinates(table.first_day(), date);

    // Four consecutive slots; the cursor advances once per slot whether or
    // not the cell held a time.
    let slot = |offset: usize| {
        table
            .cell(row, column + offset)
            .as_datetime()
            .map(|dt| dt.time())
    };

    DaySchedule::new(slot(0), slot(1), slot(2), slot(3))
}

/// Zero-based (row, column) of the day's begin slot.
pub fn day_coordinates(first_day: NaiveDate, date: NaiveDate) -> (usize, usize) {
    let week = ((date - first_day).num_days() / 7) as usize;
    let row = week + ROW_OFFSET;
    let column = MONDAY_COLUMN_OFFSET + (iso_weekday(date) as usize - 1) * DAY_COLUMN_WIDTH;

    (row, column)
}
