//! Chat transport port. The dispatcher and commands talk to the outside
//! world only through [`ChatTransport`]; concrete adapters (the console one
//! here, a chat network client elsewhere) stay out of the core.

pub mod console;

use crate::bot::event::Attachment;
use crate::errors::AppResult;

/// One tappable choice offered with a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyChoice {
    /// Text shown to the user.
    pub label: String,
    /// Payload expected back when the choice is picked.
    pub data: String,
}

/// Optional reply decorations: rows of choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyOptions {
    pub choices: Vec<Vec<ReplyChoice>>,
}

/// Outbound side of the chat boundary.
pub trait ChatTransport: Send + Sync {
    /// Deliver `text` to `conversation`.
    fn send(
        &self,
        conversation: i64,
        text: &str,
        options: Option<&ReplyOptions>,
    ) -> AppResult<()>;

    /// Fetch the bytes of a document attachment.
    fn fetch_document(&self, attachment: &Attachment) -> AppResult<Vec<u8>>;
}
