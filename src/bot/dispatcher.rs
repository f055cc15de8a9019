//! Conversation dispatcher: access gate, pending-command table, and token
//! routing.
//!
//! A conversation is `Idle` (absent from the pending table) or awaiting a
//! follow-up (its prepared command sits in the table). Events are processed
//! one at a time; the transport serializes delivery.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::bot::command::{Command, Query};
use crate::bot::commands::check::Check;
use crate::bot::commands::language::Language;
use crate::bot::commands::update::UpdateSchedule;
use crate::bot::event::InboundEvent;
use crate::errors::AppResult;
use crate::i18n::Localizer;
use crate::schedule::ScheduleStore;
use crate::transport::ChatTransport;
use crate::utils::date::{today, tomorrow};

pub struct Dispatcher {
    subject: String,
    admins: Vec<String>,
    whitelist: Vec<String>,
    upload_dir: PathBuf,
    store: Arc<ScheduleStore>,
    localizer: Arc<Localizer>,
    transport: Arc<dyn ChatTransport>,
    pending: HashMap<i64, Box<dyn Command>>,
}

impl Dispatcher {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        subject: &str,
        admins: Vec<String>,
        whitelist: Vec<String>,
        upload_dir: PathBuf,
        store: Arc<ScheduleStore>,
        localizer: Arc<Localizer>,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        Self {
            subject: subject.to_string(),
            admins,
            whitelist,
            upload_dir,
            store,
            localizer,
            transport,
            pending: HashMap::new(),
        }
    }

    /// Route one inbound event.
    pub fn dispatch(&mut self, event: InboundEvent) -> AppResult<()> {
        let conversation = event.conversation;

        if !self.is_allowed(&event.sender) {
            warn!("message from {} [UNKNOWN]", event.sender);
            let text = self.localizer.text("stranger_response", conversation)?;
            return self.transport.send(conversation, &text, None);
        }

        if self.pending.contains_key(&conversation) {
            self.handle_pending(event)
        } else {
            self.switch_command(event)
        }
    }

    /// Whether `conversation` is awaiting a follow-up message.
    pub fn is_pending(&self, conversation: i64) -> bool {
        self.pending.contains_key(&conversation)
    }

    fn is_allowed(&self, sender: &str) -> bool {
        self.whitelist.iter().any(|u| u == sender) || self.is_admin(sender)
    }

    fn is_admin(&self, sender: &str) -> bool {
        self.admins.iter().any(|u| u == sender)
    }

    /// Deliver the follow-up to the conversation's pending command. On
    /// success the conversation returns to Idle; on failure it stays pinned
    /// to the command and the user must resend a valid follow-up.
    fn handle_pending(&mut self, event: InboundEvent) -> AppResult<()> {
        let conversation = event.conversation;
        let Some(command) = self.pending.get_mut(&conversation) else {
            return Ok(());
        };

        match command.handle(Query::Message(event)) {
            Ok(()) => {
                let response = command.response().to_string();
                self.pending.remove(&conversation);
                self.transport.send(conversation, &response, None)
            }
            Err(e) => {
                warn!("follow-up failed, conversation stays pending: {}", e);
                Ok(())
            }
        }
    }

    fn switch_command(&mut self, event: InboundEvent) -> AppResult<()> {
        let conversation = event.conversation;
        let token = event.text.clone().unwrap_or_default();

        if !token.trim().is_empty() {
            info!("{} requested '{}'", event.sender, token);
        }

        match token.trim() {
            "/today" => self.initialize(
                Box::new(self.check(conversation)),
                Some(Query::Date(today())),
                conversation,
            ),
            "/tomorrow" => self.initialize(
                Box::new(self.check(conversation)),
                Some(Query::Date(tomorrow())),
                conversation,
            ),
            "/check" => self.initialize(Box::new(self.check(conversation)), None, conversation),
            "/language" => self.initialize(
                Box::new(Language::new(self.localizer.clone(), conversation)),
                None,
                conversation,
            ),
            "/update" => {
                if !self.is_admin(&event.sender) {
                    let text = self.localizer.text("no_permission", conversation)?;
                    return self.transport.send(conversation, &text, None);
                }

                let command = UpdateSchedule::new(
                    self.store.clone(),
                    self.transport.clone(),
                    self.localizer.clone(),
                    self.upload_dir.clone(),
                    conversation,
                );
                self.initialize(Box::new(command), None, conversation)
            }
            _ => {
                let text = self.localizer.text("usage", conversation)?;
                self.transport.send(conversation, &text, None)
            }
        }
    }

    /// Run `prepare`; instant commands `handle` their resolved query in the
    /// same turn, pending ones register for a follow-up.
    fn initialize(
        &mut self,
        mut command: Box<dyn Command>,
        instant_query: Option<Query>,
        conversation: i64,
    ) -> AppResult<()> {
        command.prepare()?;

        match instant_query {
            Some(query) => match command.handle(query) {
                Ok(()) => self
                    .transport
                    .send(conversation, command.response(), None),
                Err(e) => {
                    warn!("instant command failed: {}", e);
                    Ok(())
                }
            },
            None => {
                let options = command.reply_options();
                self.transport
                    .send(conversation, command.response(), options.as_ref())?;
                self.pending.insert(conversation, command);
                Ok(())
            }
        }
    }

    fn check(&self, conversation: i64) -> Check {
        Check::new(
            self.store.clone(),
            self.localizer.clone(),
            &self.subject,
            conversation,
        )
    }
}
