//! In-memory chat repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::chat::{Chat, ChatMessage};
use crate::domain::foundation::{ChatId, ResumeId};
use crate::ports::{ChatRepository, StorageError};

/// In-memory storage for chat histories, one per resume.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatStore {
    chats: Arc<RwLock<HashMap<ChatId, Chat>>>,
}

impl InMemoryChatStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatStore {
    async fn create(&self, chat: &Chat) -> Result<(), StorageError> {
        let mut chats = self.chats.write().await;
        chats.insert(chat.id, chat.clone());
        Ok(())
    }

    async fn find_by_resume(&self, resume_id: ResumeId) -> Result<Option<Chat>, StorageError> {
        let chats = self.chats.read().await;
        Ok(chats.values().find(|c| c.resume_id == resume_id).cloned())
    }

    async fn append_message(
        &self,
        chat_id: ChatId,
        message: &ChatMessage,
    ) -> Result<(), StorageError> {
        let mut chats = self.chats.write().await;
        let chat = chats
            .get_mut(&chat_id)
            .ok_or_else(|| StorageError::backend(format!("chat not found: {chat_id}")))?;
        chat.append(message.clone());
        Ok(())
    }

    async fn delete_for_resume(&self, resume_id: ResumeId) -> Result<(), StorageError> {
        let mut chats = self.chats.write().await;
        chats.retain(|_, c| c.resume_id != resume_id);
        Ok(())
    }
}
