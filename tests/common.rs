#![allow(dead_code)]
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use shiftbot::schedule::extract::{DAY_COLUMN_WIDTH, MONDAY_COLUMN_OFFSET, ROW_OFFSET};
use shiftbot::utils::time::parse_time;

/// One weekday's four slots (begin, end, additional begin, additional end),
/// each as "HH:MM" or absent.
pub struct Day {
    pub date: NaiveDate,
    pub slots: [Option<&'static str>; 4],
}

impl Day {
    pub fn shift(date: NaiveDate, begin: &'static str, end: &'static str) -> Self {
        Self {
            date,
            slots: [Some(begin), Some(end), None, None],
        }
    }

    pub fn full(
        date: NaiveDate,
        begin: &'static str,
        end: &'static str,
        add_begin: &'static str,
        add_end: &'static str,
    ) -> Self {
        Self {
            date,
            slots: [Some(begin), Some(end), Some(add_begin), Some(add_end)],
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(s: &str) -> NaiveTime {
    parse_time(s).unwrap()
}

/// Days since the Excel epoch (1899-12-30).
fn date_serial(d: NaiveDate) -> f64 {
    (d - date(1899, 12, 30)).num_days() as f64
}

/// Fraction of a day.
fn time_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86_400.0
}

/// Write a schedule workbook with the fixed weekly layout: validity bounds
/// at rows 33/34 column 3, one row per week starting at row 1, four columns
/// per weekday starting at column 10.
pub fn write_schedule(path: &Path, first_day: NaiveDate, last_day: NaiveDate, days: &[Day]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let time_format = Format::new().set_num_format("hh:mm");

    worksheet
        .write_with_format(33, 3, date_serial(first_day), &date_format)
        .unwrap();
    worksheet
        .write_with_format(34, 3, date_serial(last_day), &date_format)
        .unwrap();

    for day in days {
        let week = (day.date - first_day).num_days() / 7;
        let row = week as u32 + ROW_OFFSET as u32;
        let column = MONDAY_COLUMN_OFFSET
            + (day.date.weekday().number_from_monday() as usize - 1) * DAY_COLUMN_WIDTH;

        for (offset, slot) in day.slots.iter().enumerate() {
            if let Some(s) = slot {
                worksheet
                    .write_with_format(
                        row,
                        (column + offset) as u16,
                        time_serial(time(s)),
                        &time_format,
                    )
                    .unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Two-week February 2020 sample: week 0 works Mon/Tue/Fri 09:00–18:00,
/// week 1 has shorter shifts and a free Thursday.
pub fn write_sample_schedule(path: &Path) {
    write_schedule(
        path,
        date(2020, 2, 10),
        date(2020, 5, 31),
        &[
            Day::shift(date(2020, 2, 10), "09:00", "18:00"),
            Day::shift(date(2020, 2, 11), "09:00", "18:00"),
            Day::shift(date(2020, 2, 14), "09:00", "18:00"),
            Day::shift(date(2020, 2, 17), "09:00", "13:50"),
            Day::shift(date(2020, 2, 18), "09:00", "15:20"),
            Day::shift(date(2020, 2, 19), "09:00", "13:40"),
            Day::shift(date(2020, 2, 21), "09:00", "18:00"),
        ],
    );
}
