//! `/update`: admin-only replacement of the active schedule file.

use std::path::PathBuf;
use std::sync::Arc;

use crate::bot::command::{Command, Query};
use crate::errors::{AppError, AppResult};
use crate::i18n::Localizer;
use crate::schedule::ScheduleStore;
use crate::transport::ChatTransport;

pub struct UpdateSchedule {
    store: Arc<ScheduleStore>,
    transport: Arc<dyn ChatTransport>,
    localizer: Arc<Localizer>,
    upload_dir: PathBuf,
    conversation: i64,
    response: String,
}

impl UpdateSchedule {
    pub fn new(
        store: Arc<ScheduleStore>,
        transport: Arc<dyn ChatTransport>,
        localizer: Arc<Localizer>,
        upload_dir: PathBuf,
        conversation: i64,
    ) -> Self {
        Self {
            store,
            transport,
            localizer,
            upload_dir,
            conversation,
            response: String::new(),
        }
    }
}

impl Command for UpdateSchedule {
    fn prepare(&mut self) -> AppResult<()> {
        self.response = self.localizer.text("file_request", self.conversation)?;
        Ok(())
    }

    fn handle(&mut self, query: Query) -> AppResult<()> {
        let Query::Message(message) = query else {
            return Err(AppError::UnsupportedQuery(
                "schedule update expects a follow-up message",
            ));
        };

        let Some(attachment) = message.attachment else {
            self.response = self.localizer.text("no_document", self.conversation)?;
            return Ok(());
        };

        if attachment.extension().as_deref() != Some("xlsx") {
            self.response = self.localizer.text("file_wrong_type", self.conversation)?;
            return Ok(());
        }

        // Fetch/save/reload failures propagate: the dispatcher keeps the
        // conversation pinned to this command so the admin can resend.
        let bytes = self.transport.fetch_document(&attachment)?;

        // Only the final path component; attachment names are untrusted.
        let file_name = std::path::Path::new(&attachment.file_name)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Other("attachment has no file name".to_string()))?;

        std::fs::create_dir_all(&self.upload_dir)?;
        let path = self.upload_dir.join(file_name);
        std::fs::write(&path, bytes)?;

        self.store.reload(&path)?;

        self.response = self.localizer.text("schedule_updated", self.conversation)?;
        Ok(())
    }

    fn response(&self) -> &str {
        &self.response
    }
}
