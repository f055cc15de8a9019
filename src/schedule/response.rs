//! Structured result of a schedule query: the primary and the optional
//! secondary shift of a single day.

use chrono::{Duration, NaiveTime};

/// Begin/end times for one day. Each pair is normalized on construction:
/// if either half is missing, both halves of that pair are cleared, so a
/// pair is always either fully present or fully absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySchedule {
    begin: Option<NaiveTime>,
    end: Option<NaiveTime>,
    additional_begin: Option<NaiveTime>,
    additional_end: Option<NaiveTime>,
}

impl DaySchedule {
    pub fn new(
        begin: Option<NaiveTime>,
        end: Option<NaiveTime>,
        additional_begin: Option<NaiveTime>,
        additional_end: Option<NaiveTime>,
    ) -> Self {
        let (begin, end) = normalize_pair(begin, end);
        let (additional_begin, additional_end) = normalize_pair(additional_begin, additional_end);

        Self {
            begin,
            end,
            additional_begin,
            additional_end,
        }
    }

    /// A day with no work at all (weekend, out of range, or blank row).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Option<NaiveTime> {
        self.begin
    }

    pub fn end(&self) -> Option<NaiveTime> {
        self.end
    }

    pub fn additional_begin(&self) -> Option<NaiveTime> {
        self.additional_begin
    }

    pub fn additional_end(&self) -> Option<NaiveTime> {
        self.additional_end
    }

    /// Length of the primary shift, present iff the pair is.
    pub fn duration(&self) -> Option<Duration> {
        match (self.begin, self.end) {
            (Some(b), Some(e)) => Some(e - b),
            _ => None,
        }
    }

    /// Length of the secondary shift, present iff the pair is.
    pub fn additional_duration(&self) -> Option<Duration> {
        match (self.additional_begin, self.additional_end) {
            (Some(b), Some(e)) => Some(e - b),
            _ => None,
        }
    }

    pub fn is_workday(&self) -> bool {
        self.duration().is_some()
    }
}

fn normalize_pair(
    begin: Option<NaiveTime>,
    end: Option<NaiveTime>,
) -> (Option<NaiveTime>, Option<NaiveTime>) {
    match (begin, end) {
        (Some(b), Some(e)) => (Some(b), Some(e)),
        _ => (None, None),
    }
}
