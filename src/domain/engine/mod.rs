//! Conversation engine - content polishing, dialog responses, and the
//! per-turn orchestrator.

mod content;
mod orchestrator;
mod responder;

pub use content::{ContentGenerator, ResumeContext};
pub use orchestrator::{ConversationOrchestrator, TurnOutcome};
pub use responder::DialogResponder;
