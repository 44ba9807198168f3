//! Progress tracking - which section is being collected and how far along
//! the resume is.
//!
//! Conversation state is always recomputed from resume content plus the
//! turn count. It is never stored, so it cannot drift from the underlying
//! resume. Do not cache the result on the resume record.

use crate::domain::foundation::SectionKind;

use super::format::render_formatted_resume;
use super::resume::Resume;

/// The section currently being collected, or the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationStep {
    Section(SectionKind),
    Complete,
}

impl ConversationStep {
    /// Returns the section kind if the conversation is still collecting.
    pub fn section(&self) -> Option<SectionKind> {
        match self {
            ConversationStep::Section(kind) => Some(*kind),
            ConversationStep::Complete => None,
        }
    }

    /// Returns the wire name ("name", "title", ..., or "complete").
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationStep::Section(kind) => kind.as_str(),
            ConversationStep::Complete => "complete",
        }
    }
}

/// Derived per-turn conversation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversationState {
    pub step: ConversationStep,
    pub expecting_input: bool,
    pub is_opening_turn: bool,
}

impl ConversationState {
    /// Returns true once every catalog section is filled.
    pub fn is_complete(&self) -> bool {
        self.step == ConversationStep::Complete
    }
}

/// Derived completion summary for a resume.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionReport {
    pub is_complete: bool,
    /// Fraction of catalog sections filled, 0.0 through 1.0.
    pub completion_ratio: f64,
    /// Unfilled kinds, in catalog order.
    pub missing: Vec<SectionKind>,
    /// Rendered resume text; populated only when `is_complete`.
    pub formatted_text: Option<String>,
}

/// Locates the active conversation step for a resume.
///
/// Scans the catalog in order and returns the first kind whose section is
/// absent or whitespace-only. If every section is filled the conversation
/// is complete and no further input is expected. Deterministic and free of
/// side effects.
pub fn locate_step(resume: &Resume, turn_count: usize) -> ConversationState {
    for kind in SectionKind::all() {
        if !resume.sections.is_filled(*kind) {
            return ConversationState {
                step: ConversationStep::Section(*kind),
                expecting_input: true,
                is_opening_turn: turn_count == 0,
            };
        }
    }

    ConversationState {
        step: ConversationStep::Complete,
        expecting_input: false,
        is_opening_turn: false,
    }
}

/// Builds the completion report for a resume.
///
/// `formatted_text` is rendered only when all sections are filled.
pub fn completion_report(resume: &Resume) -> CompletionReport {
    let missing: Vec<SectionKind> = SectionKind::all()
        .iter()
        .copied()
        .filter(|k| !resume.sections.is_filled(*k))
        .collect();

    let total = SectionKind::all().len();
    let completion_ratio = (total - missing.len()) as f64 / total as f64;
    let is_complete = missing.is_empty();

    let formatted_text = if is_complete {
        Some(render_formatted_resume(resume))
    } else {
        None
    };

    CompletionReport {
        is_complete,
        completion_ratio,
        missing,
        formatted_text,
    }
}
