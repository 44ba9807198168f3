//! Chat aggregate - the append-only conversation history for a resume.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChatId, ResumeId, Timestamp};

use super::message::{ChatMessage, Sender};

/// Conversation history attached to one resume.
///
/// Messages are append-only and chronological. Each resume has at most
/// one chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub resume_id: ResumeId,
    pub messages: Vec<ChatMessage>,
    pub created_at: Timestamp,
}

impl Chat {
    /// Creates an empty chat for a resume.
    pub fn new(resume_id: ResumeId) -> Self {
        Self {
            id: ChatId::new(),
            resume_id,
            messages: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Appends a message to the history.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Number of completed user/assistant exchanges.
    ///
    /// The step locator keys its "opening turn" on this count, so an
    /// exchange counts once the user has spoken.
    pub fn turn_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::User)
            .count()
    }
}
