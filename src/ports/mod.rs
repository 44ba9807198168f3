//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TextGenerator` - the external language-model capability
//! - `ResumeRepository` / `ChatRepository` - the document store

mod chat_repository;
mod resume_repository;
mod text_generator;

pub use chat_repository::ChatRepository;
pub use resume_repository::{ResumeRepository, StorageError};
pub use text_generator::{GenerationError, GenerationPrompt, TextGenerator};
