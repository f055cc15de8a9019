//! In-memory snapshot of the decoded schedule spreadsheet.

use chrono::{NaiveDate, NaiveDateTime};

/// A single spreadsheet cell, normalized from the decoder's value space.
///
/// The fixed weekly grid only ever carries date/time cells and decoration
/// text; everything the extraction engine cannot interpret as a moment in
/// time reads as absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    DateTime(NaiveDateTime),
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The moment carried by this cell, if any.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// Decoded grid of the weekly work-hours spreadsheet plus its validity
/// window. Built once per load and swapped wholesale, never mutated.
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    rows: Vec<Vec<Cell>>,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl ScheduleTable {
    /// Invariant: `first_day <= last_day`.
    pub fn new(rows: Vec<Vec<Cell>>, first_day: NaiveDate, last_day: NaiveDate) -> Self {
        debug_assert!(first_day <= last_day);
        Self {
            rows,
            first_day,
            last_day,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Cell at zero-based (row, column); out-of-bounds reads are empty.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&Cell::Empty)
    }
}
