//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, identifiers, and enums that form
//! the vocabulary of the ResuMate domain.

mod ids;
mod section_kind;
mod timestamp;

pub use ids::{ChatId, MessageId, ResumeId};
pub use section_kind::SectionKind;
pub use timestamp::Timestamp;
