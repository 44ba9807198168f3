//! Dialog responses - the assistant's next question or acknowledgment.

use std::sync::Arc;

use crate::domain::foundation::SectionKind;
use crate::domain::resume::{ConversationState, ConversationStep, Resume};
use crate::ports::{GenerationPrompt, TextGenerator};

/// Fixed system instruction for conversational phrasing.
const ASSISTANT_SYSTEM_PROMPT: &str = "You are a professional resume-building \
    assistant. Guide users step-by-step through creating their resume. Be \
    encouraging, professional, and ask one clear question at a time.";

const RESPONSE_MAX_TOKENS: u32 = 150;
const RESPONSE_TEMPERATURE: f32 = 0.7;

/// Static greeting used when the opening-turn generation fails.
const FALLBACK_GREETING: &str = "Hello! I'm here to help you create a \
    professional resume. Let's start with the basics - what's your full name?";

/// Builds the next conversational prompt, delegating phrasing to the
/// external capability with deterministic fallback text.
pub struct DialogResponder {
    generator: Arc<dyn TextGenerator>,
}

impl DialogResponder {
    /// Creates a responder over the given capability.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Produces the assistant's next message for the step the user is now
    /// entering.
    ///
    /// Never fails: a generation error degrades to the static per-section
    /// question (or the static greeting on the opening turn), so the end
    /// user never sees an error turn.
    pub async fn next_prompt(
        &self,
        step: &ConversationState,
        user_text: &str,
        resume: &Resume,
    ) -> String {
        let instruction = build_instruction(step, user_text, resume);
        let prompt = GenerationPrompt::new(
            ASSISTANT_SYSTEM_PROMPT,
            instruction,
            RESPONSE_MAX_TOKENS,
            RESPONSE_TEMPERATURE,
        );

        match self.generator.generate(prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(_) => fallback_text(step),
        }
    }
}

/// Instruction sent to the generator, keyed by the step being entered
/// (not the one just filled) so the acknowledgment matches what the user
/// just provided.
fn build_instruction(step: &ConversationState, user_text: &str, _resume: &Resume) -> String {
    if step.is_opening_turn {
        return "Generate a warm greeting and ask for the user's full name to start \
                building their resume."
            .to_string();
    }

    if !user_text.trim().is_empty() {
        return match step.step {
            ConversationStep::Section(SectionKind::Title) => format!(
                "The user just provided their name: \"{user_text}\". Acknowledge it \
                 positively and ask for their professional title or job position \
                 they're seeking."
            ),
            ConversationStep::Section(SectionKind::Summary) => format!(
                "The user just provided their title: \"{user_text}\". Acknowledge it \
                 and ask them to describe their professional background in a few \
                 sentences."
            ),
            ConversationStep::Section(SectionKind::Skills) => {
                "The user just provided their background. Acknowledge it and ask for \
                 their top technical skills or core competencies."
                    .to_string()
            }
            ConversationStep::Section(SectionKind::Experience) => {
                "The user just provided their skills. Acknowledge them and ask about \
                 their most recent or most relevant work experience."
                    .to_string()
            }
            ConversationStep::Section(SectionKind::Projects) => {
                "The user just provided their work experience. Acknowledge it and ask \
                 about a significant project they've worked on."
                    .to_string()
            }
            ConversationStep::Section(SectionKind::Education) => format!(
                "The user just provided project information: \"{user_text}\". \
                 Acknowledge it and ask about their educational background."
            ),
            ConversationStep::Complete => format!(
                "Perfect! Thank you for providing your educational background: \
                 \"{user_text}\". Congratulations! You have successfully completed all \
                 sections of your resume including: Name, Professional Title, Summary, \
                 Skills, Experience, Projects, and Education. Your resume is now \
                 ready! Would you like to see your complete formatted resume?"
            ),
            ConversationStep::Section(kind) => format!(
                "Continue the conversation by asking about the {kind} section of \
                 their resume."
            ),
        };
    }

    default_question_instruction(step)
}

/// Instruction used when there is no user input to acknowledge.
fn default_question_instruction(step: &ConversationState) -> String {
    match step.step {
        ConversationStep::Section(SectionKind::Name) => {
            "Ask for the user's full name to start building their resume."
        }
        ConversationStep::Section(SectionKind::Title) => {
            "Ask for their professional title or desired job position."
        }
        ConversationStep::Section(SectionKind::Summary) => {
            "Ask them to describe their professional background briefly."
        }
        ConversationStep::Section(SectionKind::Skills) => {
            "Ask for their top technical skills or core competencies."
        }
        ConversationStep::Section(SectionKind::Experience) => {
            "Ask about their most recent work experience."
        }
        ConversationStep::Section(SectionKind::Projects) => {
            "Ask about a significant project they've worked on."
        }
        ConversationStep::Section(SectionKind::Education) => {
            "Ask about their educational background."
        }
        ConversationStep::Complete => "Continue helping them build their resume.",
    }
    .to_string()
}

/// The literal text shown when generation fails.
fn fallback_text(step: &ConversationState) -> String {
    if step.is_opening_turn {
        return FALLBACK_GREETING.to_string();
    }
    default_question(step).to_string()
}

/// Static per-section fallback questions.
///
/// The Complete step has no entry in the table and falls through to the
/// generic sentence, mirroring the original lookup-miss behavior.
pub fn default_question(step: &ConversationState) -> &'static str {
    match step.step {
        ConversationStep::Section(SectionKind::Name) => "What is your full name?",
        ConversationStep::Section(SectionKind::Title) => {
            "What is your professional title or the position you're seeking?"
        }
        ConversationStep::Section(SectionKind::Summary) => {
            "Can you tell me about your professional background in a few sentences?"
        }
        ConversationStep::Section(SectionKind::Skills) => {
            "What are your top technical skills or areas of expertise?"
        }
        ConversationStep::Section(SectionKind::Experience) => {
            "Can you describe your most recent work experience?"
        }
        ConversationStep::Section(SectionKind::Projects) => {
            "Tell me about a significant project you've worked on."
        }
        ConversationStep::Section(SectionKind::Education) => {
            "What is your educational background?"
        }
        ConversationStep::Complete => "Can you provide more information about this section?",
    }
}
