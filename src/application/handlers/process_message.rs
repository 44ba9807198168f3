//! ProcessMessage handler - the turn endpoint.
//!
//! Loads the resume and its chat, runs one orchestrator turn, persists
//! the outcome, and assembles the wire response. Every failure comes back
//! as a structured `{success: false, error}` response; nothing escapes as
//! a panic or a partial write reported as success.

use std::sync::Arc;

use crate::application::responses::{
    ChatTurnView, CompletionStatusResponse, StepView, TurnResponse,
};
use crate::domain::chat::{Chat, ChatMessage};
use crate::domain::engine::ConversationOrchestrator;
use crate::domain::foundation::ResumeId;
use crate::ports::{ChatRepository, ResumeRepository, StorageError};

/// Handles one conversational turn against a stored resume.
pub struct ProcessMessageHandler {
    resumes: Arc<dyn ResumeRepository>,
    chats: Arc<dyn ChatRepository>,
    orchestrator: ConversationOrchestrator,
}

impl ProcessMessageHandler {
    /// Creates the handler over its collaborators.
    pub fn new(
        resumes: Arc<dyn ResumeRepository>,
        chats: Arc<dyn ChatRepository>,
        orchestrator: ConversationOrchestrator,
    ) -> Self {
        Self {
            resumes,
            chats,
            orchestrator,
        }
    }

    /// Processes a user message for the given resume.
    pub async fn handle(&self, resume_id: ResumeId, message: &str) -> TurnResponse {
        match self.process(resume_id, message).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%resume_id, error = %err, "turn failed");
                TurnResponse::failure(err.to_string())
            }
        }
    }

    async fn process(
        &self,
        resume_id: ResumeId,
        message: &str,
    ) -> Result<TurnResponse, StorageError> {
        let mut resume = self
            .resumes
            .find_by_id(resume_id)
            .await?
            .ok_or(StorageError::NotFound(resume_id))?;

        let chat = match self.chats.find_by_resume(resume_id).await? {
            Some(chat) => chat,
            None => {
                let chat = Chat::new(resume_id);
                self.chats.create(&chat).await?;
                chat
            }
        };

        let outcome = self
            .orchestrator
            .take_turn(&mut resume, chat.turn_count(), message)
            .await;

        if let Some(section) = outcome.updated_section {
            if outcome.generated_content.is_none() {
                tracing::warn!(
                    %resume_id,
                    %section,
                    "content generation failed, stored raw input"
                );
            }
            // Atomic-or-nothing: if this save fails the turn fails, and
            // nothing is reported as updated.
            self.resumes.update(&resume).await?;
        }

        let user_message = ChatMessage::from_user(message);
        let bot_message = ChatMessage::from_assistant(&outcome.bot_text);
        self.chats.append_message(chat.id, &user_message).await?;
        self.chats.append_message(chat.id, &bot_message).await?;

        let complete_resume_data = outcome
            .completion
            .map(|report| CompletionStatusResponse::from_report(&resume, report));

        Ok(TurnResponse {
            success: true,
            user_message: Some(ChatTurnView::from(&user_message)),
            bot_message: Some(ChatTurnView::from(&bot_message)),
            resume: Some((&resume).into()),
            generated_content: outcome.generated_content,
            updated_section: outcome.updated_section,
            current_step: Some(StepView::from(&outcome.next_step)),
            show_complete_resume: outcome.show_final_resume,
            complete_resume_data,
            error: None,
        })
    }
}
