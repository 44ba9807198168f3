//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums)
//! - `resume` - Resume aggregate, section table, progress tracking
//! - `chat` - Conversation history and intent detection
//! - `engine` - The per-turn conversation engine

pub mod chat;
pub mod engine;
pub mod foundation;
pub mod resume;
