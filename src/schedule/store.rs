//! Shared ownership of the active schedule: atomic table swap plus the
//! single-active-schedule-file policy.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::errors::AppResult;
use crate::schedule::extract::schedule_for_day;
use crate::schedule::loader::load_table;
use crate::schedule::response::DaySchedule;
use crate::schedule::table::ScheduleTable;

struct ActiveSchedule {
    table: Arc<ScheduleTable>,
    path: PathBuf,
}

/// Holder of the currently loaded schedule.
///
/// Readers see either the fully-old or the fully-new table, never a mix:
/// `reload` parses the replacement completely before taking the write lock
/// for a single pointer swap. A failed load leaves the active table (and its
/// backing file) untouched.
pub struct ScheduleStore {
    active: RwLock<ActiveSchedule>,
}

impl ScheduleStore {
    /// Load the initial schedule from `path`.
    pub fn open(path: &Path) -> AppResult<Self> {
        let table = load_table(path)?;
        info!(
            "schedule loaded from {} ({} – {})",
            path.display(),
            table.first_day(),
            table.last_day()
        );

        Ok(Self {
            active: RwLock::new(ActiveSchedule {
                table: Arc::new(table),
                path: path.to_path_buf(),
            }),
        })
    }

    /// Replace the active schedule with the file at `path`.
    ///
    /// On success the superseded backing file is deleted when its path
    /// differs from the new one; a same-path reload deletes nothing.
    pub fn reload(&self, path: &Path) -> AppResult<()> {
        let table = load_table(path)?;

        let previous = {
            let mut active = self.active.write();
            let previous = active.path.clone();
            active.table = Arc::new(table);
            active.path = path.to_path_buf();
            previous
        };

        if previous != path {
            if let Err(e) = std::fs::remove_file(&previous) {
                warn!(
                    "could not delete superseded schedule file {}: {}",
                    previous.display(),
                    e
                );
            }
        }

        let (first, last) = self.bounds();
        info!(
            "schedule reloaded from {} ({} – {})",
            path.display(),
            first,
            last
        );

        Ok(())
    }

    /// Extract the shifts for `date` from the active table.
    pub fn schedule_for_day(&self, date: NaiveDate) -> DaySchedule {
        let table = self.snapshot();
        schedule_for_day(&table, date)
    }

    /// Inclusive validity window of the active table.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        let table = self.snapshot();
        (table.first_day(), table.last_day())
    }

    /// Cheap handle to the active table, stable across concurrent reloads.
    pub fn snapshot(&self) -> Arc<ScheduleTable> {
        self.active.read().table.clone()
    }
}
