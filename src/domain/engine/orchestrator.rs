//! Conversation orchestrator - the per-turn state machine.
//!
//! The state machine's states are the seven catalog kinds plus an
//! absorbing Complete state. Progression is strictly forward, one state
//! per turn in which the user supplies non-empty content for the active
//! section; there are no backward transitions and no skipping. State is
//! derived from the resume on every turn rather than stored.

use std::sync::Arc;

use crate::domain::chat::is_resume_view_request;
use crate::domain::foundation::{SectionKind, Timestamp};
use crate::domain::resume::{
    completion_report, CompletionReport, ConversationState, ConversationStep, Resume,
};
use crate::ports::TextGenerator;

use super::content::{ContentGenerator, ResumeContext};
use super::responder::DialogResponder;

/// Fixed message emitted when the user asks to view the finished resume.
const SHOW_RESUME_MESSAGE: &str = "Perfect! I'll show you your complete \
    formatted resume now. You can use this to apply for jobs or save it for \
    future use.";

/// Result of one conversational turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The assistant's reply.
    pub bot_text: String,
    /// Polished content written this turn; `None` when generation failed
    /// (the raw input was stored instead) or no section was written.
    pub generated_content: Option<String>,
    /// The section written this turn, if any.
    pub updated_section: Option<SectionKind>,
    /// The step the conversation is in after this turn.
    pub next_step: ConversationState,
    /// True when the user asked to see the finished resume.
    pub show_final_resume: bool,
    /// Populated only when `show_final_resume` is set.
    pub completion: Option<CompletionReport>,
    /// When the turn happened.
    pub timestamp: Timestamp,
}

/// Drives one turn of the resume-building conversation.
///
/// Precondition (documented, not enforced): at most one turn in flight
/// per resume. The two external calls within a turn are sequential; the
/// next-prompt instruction depends on the outcome of content generation.
pub struct ConversationOrchestrator {
    content: ContentGenerator,
    responder: DialogResponder,
}

impl ConversationOrchestrator {
    /// Creates an orchestrator over the given text-generation capability.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            content: ContentGenerator::new(Arc::clone(&generator)),
            responder: DialogResponder::new(generator),
        }
    }

    /// Locates the active step for a resume.
    ///
    /// First catalog kind without content is active; if all are filled the
    /// conversation is complete. The opening turn is the very first user
    /// message of a conversation still collecting the name.
    pub fn locate_step(&self, resume: &Resume, turn_count: usize) -> ConversationState {
        let mut state = crate::domain::resume::locate_step(resume, turn_count);
        if state.step != ConversationStep::Section(SectionKind::Name) {
            state.is_opening_turn = false;
        }
        state
    }

    /// Processes one user message against the resume.
    ///
    /// Section writes happen only after generation succeeds or via the
    /// raw-input fallback, never partially; generation failures degrade
    /// inside the turn and are not surfaced as errors.
    pub async fn take_turn(
        &self,
        resume: &mut Resume,
        turn_count: usize,
        user_text: &str,
    ) -> TurnOutcome {
        let step = self.locate_step(resume, turn_count);

        // Finished resume + affirmative message: report, don't mutate.
        if step.is_complete() && is_resume_view_request(user_text) {
            return TurnOutcome {
                bot_text: SHOW_RESUME_MESSAGE.to_string(),
                generated_content: None,
                updated_section: None,
                next_step: step,
                show_final_resume: true,
                completion: Some(completion_report(resume)),
                timestamp: Timestamp::now(),
            };
        }

        let mut generated_content = None;
        let mut updated_section = None;

        if step.expecting_input && !user_text.trim().is_empty() {
            if let Some(kind) = step.step.section() {
                let context = ResumeContext::from_resume(resume);
                match self.content.polish(kind, user_text, &context).await {
                    Ok(text) => {
                        resume.write_section(kind, text.clone(), true);
                        generated_content = Some(text);
                    }
                    // Degrade to the raw input; the turn still succeeds.
                    Err(_) => {
                        resume.write_section(kind, user_text, false);
                    }
                }
                updated_section = Some(kind);
            }
        }

        // Recompute against the just-mutated resume, never the
        // pre-mutation one.
        let next_step = self.locate_step(resume, turn_count);
        let bot_text = self.responder.next_prompt(&next_step, user_text, resume).await;

        TurnOutcome {
            bot_text,
            generated_content,
            updated_section,
            next_step,
            show_final_resume: false,
            completion: None,
            timestamp: Timestamp::now(),
        }
    }
}
