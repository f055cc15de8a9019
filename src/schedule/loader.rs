//! Spreadsheet decoding boundary: turns an `.xlsx` file into a
//! [`ScheduleTable`].
//!
//! The decoder is confined to this module; the rest of the crate only ever
//! sees the normalized [`Cell`] grid.

use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::schedule::table::{Cell, ScheduleTable};

/// Row holding the first valid calendar day.
pub const FIRST_DAY_ROW: usize = 33;

/// Row holding the last valid calendar day.
pub const LAST_DAY_ROW: usize = 34;

/// Column holding both validity-bound cells.
pub const BOUNDS_COLUMN: usize = 3;

/// Decode the workbook at `path` into a table.
///
/// Fails with [`AppError::Decode`] when the document cannot be opened or
/// parsed, and with [`AppError::Layout`] when the two bound cells are not
/// interpretable as dates. Time-of-day in the bound cells is stripped.
pub fn load_table(path: &Path) -> AppResult<ScheduleTable> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| AppError::Decode(e.to_string()))?;

    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Decode("workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| AppError::Decode(e.to_string()))?;

    // Materialize the grid from absolute (0, 0) so the fixed layout indices
    // hold regardless of where the used area starts.
    let (end_row, end_column) = range.end().unwrap_or((0, 0));

    let mut rows = Vec::with_capacity(end_row as usize + 1);
    for r in 0..=end_row {
        let mut row = Vec::with_capacity(end_column as usize + 1);
        for c in 0..=end_column {
            row.push(convert_cell(range.get_value((r, c))));
        }
        rows.push(row);
    }

    let first_day = bound_date(&rows, FIRST_DAY_ROW)?;
    let last_day = bound_date(&rows, LAST_DAY_ROW)?;

    if first_day > last_day {
        return Err(AppError::Layout(format!(
            "first day {} is after last day {}",
            first_day, last_day
        )));
    }

    Ok(ScheduleTable::new(rows, first_day, last_day))
}

fn convert_cell(value: Option<&Data>) -> Cell {
    match value {
        None | Some(Data::Empty) | Some(Data::Error(_)) => Cell::Empty,
        Some(Data::String(s)) => Cell::Text(s.clone()),
        Some(Data::Bool(b)) => Cell::Text(b.to_string()),
        Some(Data::Float(f)) => Cell::Number(*f),
        Some(Data::Int(i)) => Cell::Number(*i as f64),
        Some(d @ (Data::DateTime(_) | Data::DateTimeIso(_))) => {
            d.as_datetime().map(Cell::DateTime).unwrap_or(Cell::Empty)
        }
        Some(Data::DurationIso(s)) => Cell::Text(s.clone()),
    }
}

fn bound_date(rows: &[Vec<Cell>], row: usize) -> AppResult<NaiveDate> {
    match rows.get(row).and_then(|r| r.get(BOUNDS_COLUMN)) {
        Some(Cell::DateTime(dt)) => Ok(dt.date()),
        _ => Err(AppError::Layout(format!(
            "bound cell ({}, {}) does not hold a date",
            row, BOUNDS_COLUMN
        ))),
    }
}
