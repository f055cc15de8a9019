//! `/check`, `/today`, `/tomorrow`: report the subject's shifts for a date.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use crate::bot::command::{Command, Query};
use crate::errors::AppResult;
use crate::i18n::Localizer;
use crate::schedule::ScheduleStore;
use crate::utils::time::{format_time, hours_and_minutes};

pub struct Check {
    store: Arc<ScheduleStore>,
    localizer: Arc<Localizer>,
    subject: String,
    conversation: i64,
    response: String,
}

impl Check {
    pub fn new(
        store: Arc<ScheduleStore>,
        localizer: Arc<Localizer>,
        subject: &str,
        conversation: i64,
    ) -> Self {
        Self {
            store,
            localizer,
            subject: subject.to_string(),
            conversation,
            response: String::new(),
        }
    }

    fn render(&self, date: NaiveDate) -> AppResult<String> {
        let schedule = self.store.schedule_for_day(date);
        let short_date = self.localizer.short_date(date, self.conversation);

        let Some(duration) = schedule.duration() else {
            return self
                .localizer
                .format("no_work", self.conversation, &[&self.subject, &short_date]);
        };

        // The pair is normalized, so begin/end are present alongside the
        // duration; empty() placeholders keep the formatting total anyway.
        let begin = schedule.begin().map(format_time).unwrap_or_default();
        let end = schedule.end().map(format_time).unwrap_or_default();

        let mut lines = vec![
            self.localizer
                .format("has_work", self.conversation, &[&self.subject, &short_date])?,
            self.localizer.format(
                "from_to_for",
                self.conversation,
                &[&begin, &end, &self.long_duration(duration)?],
            )?,
        ];

        if let Some(additional) = schedule.additional_duration() {
            let add_begin = schedule
                .additional_begin()
                .map(format_time)
                .unwrap_or_default();
            let add_end = schedule
                .additional_end()
                .map(format_time)
                .unwrap_or_default();

            lines.push(self.localizer.text("and_also", self.conversation)?);
            lines.push(self.localizer.format(
                "additional_work_time",
                self.conversation,
                &[&add_begin, &add_end, &self.long_duration(additional)?],
            )?);
        }

        Ok(lines.join("\n"))
    }

    /// "9 h 30 min" with zero components omitted.
    fn long_duration(&self, duration: Duration) -> AppResult<String> {
        let (hours, minutes) = hours_and_minutes(duration);
        let mut parts = Vec::new();

        if hours != 0 {
            parts.push(self.localizer.format(
                "hours",
                self.conversation,
                &[&hours.to_string()],
            )?);
        }
        if minutes != 0 || hours == 0 {
            parts.push(self.localizer.format(
                "minutes",
                self.conversation,
                &[&minutes.to_string()],
            )?);
        }

        Ok(parts.join(" "))
    }
}

impl Command for Check {
    fn prepare(&mut self) -> AppResult<()> {
        let pattern = self.localizer.locale_for(self.conversation).date_pattern();
        self.response = self
            .localizer
            .format("check_prepare", self.conversation, &[pattern])?;
        Ok(())
    }

    fn handle(&mut self, query: Query) -> AppResult<()> {
        let date = match query {
            Query::Date(date) => Some(date),
            Query::Message(message) => message
                .text
                .as_deref()
                .and_then(|t| self.localizer.try_parse_date(t, self.conversation)),
        };

        self.response = match date {
            Some(date) => self.render(date)?,
            // Unparseable follow-up text is a handled outcome, not an error:
            // the conversation is released back to Idle.
            None => self.localizer.text("not_a_date", self.conversation)?,
        };

        Ok(())
    }

    fn response(&self) -> &str {
        &self.response
    }
}
