//! Wire-shaped response types for the application handlers.
//!
//! Field names match the original chat protocol (camelCase), so a
//! transport layer can serialize these directly.

use serde::Serialize;

use crate::domain::chat::{ChatMessage, Sender};
use crate::domain::foundation::{ResumeId, SectionKind, Timestamp};
use crate::domain::resume::{CompletionReport, ConversationState, Resume, Section};

/// One rendered chat turn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurnView {
    pub content: String,
    pub sender: Sender,
    pub timestamp: Timestamp,
}

impl From<&ChatMessage> for ChatTurnView {
    fn from(message: &ChatMessage) -> Self {
        Self {
            content: message.content.clone(),
            sender: message.sender,
            timestamp: message.timestamp,
        }
    }
}

/// The conversation step as exposed on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView {
    /// "name", "title", ..., or "complete".
    pub section: String,
    pub expecting_input: bool,
    pub is_first_message: bool,
}

impl From<&ConversationState> for StepView {
    fn from(state: &ConversationState) -> Self {
        Self {
            section: state.step.as_str().to_string(),
            expecting_input: state.expecting_input,
            is_first_message: state.is_opening_turn,
        }
    }
}

/// Resume snapshot with only the sections that exist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeView {
    pub id: ResumeId,
    pub title: String,
    pub sections: Vec<Section>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Resume> for ResumeView {
    fn from(resume: &Resume) -> Self {
        Self {
            id: resume.id,
            title: resume.title.clone(),
            sections: resume.sections.iter().cloned().collect(),
            created_at: resume.created_at,
            updated_at: resume.updated_at,
        }
    }
}

/// Completion status for a resume, optionally with the rendered text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStatusResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeView>,
    pub is_complete: bool,
    /// 0-100, rounded.
    pub completion_percentage: u32,
    pub missing_sections: Vec<SectionKind>,
    pub formatted_resume: Option<String>,
    pub error: Option<String>,
}

impl CompletionStatusResponse {
    /// Builds the status response from a completion report.
    pub fn from_report(resume: &Resume, report: CompletionReport) -> Self {
        Self {
            success: true,
            resume: Some(ResumeView::from(resume)),
            is_complete: report.is_complete,
            completion_percentage: (report.completion_ratio * 100.0).round() as u32,
            missing_sections: report.missing,
            formatted_resume: report.formatted_text,
            error: None,
        }
    }

    /// Builds a failure response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            resume: None,
            is_complete: false,
            completion_percentage: 0,
            missing_sections: Vec::new(),
            formatted_resume: None,
            error: Some(message.into()),
        }
    }
}

/// Result of processing one user message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub success: bool,
    pub user_message: Option<ChatTurnView>,
    pub bot_message: Option<ChatTurnView>,
    pub resume: Option<ResumeView>,
    pub generated_content: Option<String>,
    pub updated_section: Option<SectionKind>,
    pub current_step: Option<StepView>,
    pub show_complete_resume: bool,
    pub complete_resume_data: Option<CompletionStatusResponse>,
    pub error: Option<String>,
}

impl TurnResponse {
    /// Builds a failure response with every other field cleared.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            user_message: None,
            bot_message: None,
            resume: None,
            generated_content: None,
            updated_section: None,
            current_step: None,
            show_complete_resume: false,
            complete_resume_data: None,
            error: Some(message.into()),
        }
    }
}
