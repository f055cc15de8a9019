//! `/language`: switch the conversation's reply language.

use std::sync::Arc;

use crate::bot::command::{Command, Query};
use crate::errors::{AppError, AppResult};
use crate::i18n::{Locale, Localizer};
use crate::transport::{ReplyChoice, ReplyOptions};

pub struct Language {
    localizer: Arc<Localizer>,
    conversation: i64,
    response: String,
    options: Option<ReplyOptions>,
}

impl Language {
    pub fn new(localizer: Arc<Localizer>, conversation: i64) -> Self {
        Self {
            localizer,
            conversation,
            response: String::new(),
            options: None,
        }
    }
}

impl Command for Language {
    fn prepare(&mut self) -> AppResult<()> {
        self.response = self.localizer.text("language_select", self.conversation)?;
        self.options = Some(ReplyOptions {
            choices: vec![vec![
                ReplyChoice {
                    label: self.localizer.text("language_english", self.conversation)?,
                    data: Locale::EnUs.tag().to_string(),
                },
                ReplyChoice {
                    label: self.localizer.text("language_russian", self.conversation)?,
                    data: Locale::RuRu.tag().to_string(),
                },
            ]],
        });
        Ok(())
    }

    fn handle(&mut self, query: Query) -> AppResult<()> {
        let Query::Message(message) = query else {
            return Err(AppError::UnsupportedQuery(
                "language selection expects a follow-up message",
            ));
        };

        self.response = match message.text.as_deref().and_then(Locale::from_tag) {
            Some(locale) => {
                // Set first so the confirmation already speaks the new language.
                self.localizer.set_locale(self.conversation, locale);
                self.localizer.text("language_selected", self.conversation)?
            }
            None => self.localizer.text("language_unknown", self.conversation)?,
        };

        Ok(())
    }

    fn response(&self) -> &str {
        &self.response
    }

    fn reply_options(&self) -> Option<ReplyOptions> {
        self.options.clone()
    }
}
