//! Console adapter: a minimal local front end for the bot.
//!
//! Each stdin line becomes one inbound event; a line naming an existing file
//! is delivered as a document attachment (the path doubles as the file id),
//! which makes the `/update` flow usable from a terminal.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::bot::event::{Attachment, InboundEvent};
use crate::errors::{AppError, AppResult};
use crate::transport::{ChatTransport, ReplyOptions};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const FG_CYAN: &str = "\x1b[36m";
const FG_YELLOW: &str = "\x1b[33m";

/// Conversation id used for the single local session.
pub const CONSOLE_CONVERSATION: i64 = 0;

pub struct ConsoleTransport {
    sender: String,
}

impl ConsoleTransport {
    pub fn new(sender: &str) -> Self {
        Self {
            sender: sender.to_string(),
        }
    }

    /// Block until the next stdin line; `None` on EOF.
    pub fn next_event(&self) -> AppResult<Option<InboundEvent>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim();
        if line.is_empty() {
            return Ok(Some(InboundEvent::text_message(
                CONSOLE_CONVERSATION,
                &self.sender,
                "",
            )));
        }

        let path = Path::new(line);
        if path.is_file() {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| line.to_string());

            return Ok(Some(InboundEvent::document(
                CONSOLE_CONVERSATION,
                &self.sender,
                Attachment {
                    file_name,
                    file_id: line.to_string(),
                },
            )));
        }

        Ok(Some(InboundEvent::text_message(
            CONSOLE_CONVERSATION,
            &self.sender,
            line,
        )))
    }
}

impl ChatTransport for ConsoleTransport {
    fn send(&self, _conversation: i64, text: &str, options: Option<&ReplyOptions>) -> AppResult<()> {
        let mut out = io::stdout().lock();

        writeln!(out, "{}{}bot:{} {}", FG_CYAN, BOLD, RESET, text)?;

        if let Some(options) = options {
            for row in &options.choices {
                for choice in row {
                    writeln!(
                        out,
                        "  {}[{}]{} {}",
                        FG_YELLOW, choice.data, RESET, choice.label
                    )?;
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    fn fetch_document(&self, attachment: &Attachment) -> AppResult<Vec<u8>> {
        std::fs::read(&attachment.file_id)
            .map_err(|e| AppError::Transport(format!("{}: {}", attachment.file_id, e)))
    }
}
