//! Resume sections and the fixed table that holds them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SectionKind;

/// One resume section.
///
/// Content may be empty (the section exists but has not been filled yet).
/// `generated_by_assistant` records whether the stored text came from the
/// AI polish step or was the user's raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub content: String,
    #[serde(rename = "modifiedByAI")]
    pub generated_by_assistant: bool,
}

impl Section {
    /// Creates a filled section.
    pub fn filled(kind: SectionKind, content: impl Into<String>, generated: bool) -> Self {
        Self {
            kind,
            content: content.into(),
            generated_by_assistant: generated,
        }
    }

    /// Returns true if the section has non-whitespace content.
    pub fn is_filled(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Fixed table of sections indexed by [`SectionKind`].
///
/// One slot per kind, so "at most one section per kind" holds by
/// construction and there is no missing-key ambiguity. Slots start empty
/// and are created on first write; sections are never removed
/// individually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionTable {
    slots: [Option<Section>; 7],
}

impl SectionTable {
    /// Creates a table with all slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the section for a kind, if it exists.
    pub fn get(&self, kind: SectionKind) -> Option<&Section> {
        self.slots[kind.order_index()].as_ref()
    }

    /// Returns the stored content for a kind, or `None` if the section is
    /// absent or whitespace-only.
    pub fn content(&self, kind: SectionKind) -> Option<&str> {
        self.get(kind)
            .filter(|s| s.is_filled())
            .map(|s| s.content.as_str())
    }

    /// Returns true if the kind has non-empty content.
    pub fn is_filled(&self, kind: SectionKind) -> bool {
        self.content(kind).is_some()
    }

    /// Writes content for a kind, creating the section on first write and
    /// mutating it in place thereafter.
    pub fn write(&mut self, kind: SectionKind, content: impl Into<String>, generated: bool) {
        self.slots[kind.order_index()] = Some(Section::filled(kind, content, generated));
    }

    /// Iterates existing sections in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    /// Number of filled sections.
    pub fn filled_count(&self) -> usize {
        SectionKind::all()
            .iter()
            .filter(|k| self.is_filled(**k))
            .count()
    }
}
