//! In-memory repository adapters.

mod chat_store;
mod resume_store;

pub use chat_store::InMemoryChatStore;
pub use resume_store::InMemoryResumeStore;
