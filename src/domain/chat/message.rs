//! Chat messages exchanged between the user and the assistant.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    #[serde(rename = "ai")]
    Assistant,
}

/// One message in a chat, in chronological order within the chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub content: String,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// Creates a message stamped with the current time.
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender,
            content: content.into(),
            timestamp: Timestamp::now(),
        }
    }

    /// Creates a user message.
    pub fn from_user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    /// Creates an assistant message.
    pub fn from_assistant(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_sender() {
        assert_eq!(ChatMessage::from_user("hi").sender, Sender::User);
        assert_eq!(ChatMessage::from_assistant("hello").sender, Sender::Assistant);
    }

    #[test]
    fn sender_serializes_with_wire_names() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Assistant).unwrap(), "\"ai\"");
    }
}
