//! Time utilities: parsing HH:MM, duration computations, formatting minutes, etc.

use chrono::{Duration, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Render a time of day as "HH:MM".
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Split a duration into whole hours and leftover minutes.
pub fn hours_and_minutes(d: Duration) -> (i64, i64) {
    let mins = d.num_minutes();
    (mins / 60, mins % 60)
}
