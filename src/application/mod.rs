//! Application layer - handlers and wire-shaped responses.
//!
//! This layer coordinates domain operations with the ports: it loads and
//! persists documents, runs the conversation engine, and shapes results
//! for the transport layer. Recoverable degradations are logged here;
//! the domain core stays log-free.

pub mod handlers;
pub mod responses;

pub use handlers::{ManageResumeHandler, ProcessMessageHandler, ResumeStatusHandler};
pub use responses::{
    ChatTurnView, CompletionStatusResponse, ResumeView, StepView, TurnResponse,
};
