//! Chat history and intent detection.

mod chat;
mod intent;
mod message;

pub use chat::Chat;
pub use intent::is_resume_view_request;
pub use message::{ChatMessage, Sender};
