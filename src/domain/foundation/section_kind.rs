//! SectionKind enum representing the 7 canonical resume sections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 7 resume sections, in mandatory collection order.
///
/// This list is the single source of truth: collection sequence,
/// completeness checks, and final rendering all derive from `all()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Name,
    Title,
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
}

impl SectionKind {
    /// Returns all section kinds in canonical order.
    pub fn all() -> &'static [SectionKind] {
        &[
            SectionKind::Name,
            SectionKind::Title,
            SectionKind::Summary,
            SectionKind::Skills,
            SectionKind::Experience,
            SectionKind::Projects,
            SectionKind::Education,
        ]
    }

    /// Returns the 0-based index of this kind in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            SectionKind::Name => 0,
            SectionKind::Title => 1,
            SectionKind::Summary => 2,
            SectionKind::Skills => 3,
            SectionKind::Experience => 4,
            SectionKind::Projects => 5,
            SectionKind::Education => 6,
        }
    }

    /// Returns the next kind in collection order, if any.
    pub fn next(&self) -> Option<SectionKind> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns true if this kind comes before another in collection order.
    pub fn is_before(&self, other: &SectionKind) -> bool {
        self.order_index() < other.order_index()
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionKind::Name => "Name",
            SectionKind::Title => "Professional Title",
            SectionKind::Summary => "Summary",
            SectionKind::Skills => "Skills",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Education => "Education",
        }
    }

    /// Returns the heading used when rendering the formatted resume.
    ///
    /// Name and title render as header lines rather than titled sections.
    pub fn render_heading(&self) -> Option<&'static str> {
        match self {
            SectionKind::Name | SectionKind::Title => None,
            SectionKind::Summary => Some("PROFESSIONAL SUMMARY"),
            SectionKind::Skills => Some("TECHNICAL SKILLS"),
            SectionKind::Experience => Some("PROFESSIONAL EXPERIENCE"),
            SectionKind::Projects => Some("KEY PROJECTS"),
            SectionKind::Education => Some("EDUCATION"),
        }
    }

    /// Returns the lowercase wire name (matches the chat protocol).
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Name => "name",
            SectionKind::Title => "title",
            SectionKind::Summary => "summary",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Education => "education",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
