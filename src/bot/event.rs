//! Inbound chat events, reduced to the narrow shape the dispatcher needs.

/// A document attached to a message. `file_id` is whatever handle the
/// transport needs to fetch the bytes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub file_id: String,
}

impl Attachment {
    /// Lowercased filename extension, without the dot.
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }
}

/// One message delivered by the chat transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub conversation: i64,
    pub sender: String,
    pub text: Option<String>,
    pub attachment: Option<Attachment>,
}

impl InboundEvent {
    pub fn text_message(conversation: i64, sender: &str, text: &str) -> Self {
        Self {
            conversation,
            sender: sender.to_string(),
            text: Some(text.to_string()),
            attachment: None,
        }
    }

    pub fn document(conversation: i64, sender: &str, attachment: Attachment) -> Self {
        Self {
            conversation,
            sender: sender.to_string(),
            text: None,
            attachment: Some(attachment),
        }
    }
}
