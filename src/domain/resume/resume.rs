//! Resume aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ResumeId, SectionKind, Timestamp};

use super::section::SectionTable;

/// A resume being assembled through the conversation.
///
/// Holds at most one section per kind (enforced by [`SectionTable`]).
/// The conversation engine owns the resume only for the duration of a
/// turn; it carries no conversation state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub id: ResumeId,
    pub title: String,
    pub sections: SectionTable,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Resume {
    /// Creates a new resume with the given title and no section content.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: ResumeId::new(),
            title: title.into(),
            sections: SectionTable::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Writes a section and refreshes `updated_at`.
    pub fn write_section(&mut self, kind: SectionKind, content: impl Into<String>, generated: bool) {
        self.sections.write(kind, content, generated);
        self.updated_at = Timestamp::now();
    }

    /// Convenience accessor for the candidate's name, if collected.
    pub fn candidate_name(&self) -> Option<&str> {
        self.sections.content(SectionKind::Name)
    }

    /// Convenience accessor for the professional title, if collected.
    pub fn candidate_title(&self) -> Option<&str> {
        self.sections.content(SectionKind::Title)
    }
}
