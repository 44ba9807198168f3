//! Chat repository port.
//!
//! One chat per resume; messages are append-only and must be persisted in
//! order.

use async_trait::async_trait;

use crate::domain::chat::{Chat, ChatMessage};
use crate::domain::foundation::{ChatId, ResumeId};

use super::resume_repository::StorageError;

/// Repository port for chat histories.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Persists a new chat.
    async fn create(&self, chat: &Chat) -> Result<(), StorageError>;

    /// Finds the chat attached to a resume. Returns `None` if the
    /// conversation has not started.
    async fn find_by_resume(&self, resume_id: ResumeId) -> Result<Option<Chat>, StorageError>;

    /// Appends a message to an existing chat.
    ///
    /// # Errors
    ///
    /// `Backend` if the chat does not exist or the write fails.
    async fn append_message(&self, chat_id: ChatId, message: &ChatMessage)
        -> Result<(), StorageError>;

    /// Deletes the chat for a resume, if any. Used when the resume itself
    /// is deleted.
    async fn delete_for_resume(&self, resume_id: ResumeId) -> Result<(), StorageError>;
}
