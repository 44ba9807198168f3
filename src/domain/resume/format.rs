//! Plain-text rendering of a finished resume.

use std::fmt::Write;

use crate::domain::foundation::{SectionKind, Timestamp};

use super::resume::Resume;

const RULE: &str = "--------------------------------------------------";

/// Renders the fixed plain-text resume template.
///
/// Name and title render as header lines; the remaining sections render
/// in catalog order under their literal headings, separated by rule
/// markers. Sections without content fall back to a
/// "<Section> not provided" placeholder. Ends with a generation
/// timestamp footer.
pub fn render_formatted_resume(resume: &Resume) -> String {
    let mut out = String::new();

    writeln!(out, "{}", header_line(resume, SectionKind::Name)).ok();
    writeln!(out, "{}", header_line(resume, SectionKind::Title)).ok();

    for kind in SectionKind::all() {
        let Some(heading) = kind.render_heading() else {
            continue;
        };

        writeln!(out).ok();
        writeln!(out, "{}", RULE).ok();
        writeln!(out, "{}", heading).ok();
        writeln!(out, "{}", RULE).ok();
        writeln!(out, "{}", body_text(resume, *kind)).ok();
    }

    writeln!(out).ok();
    writeln!(out, "{}", RULE).ok();
    write!(out, "Generated on {}", Timestamp::now().display_date()).ok();

    out
}

fn header_line(resume: &Resume, kind: SectionKind) -> String {
    body_text(resume, kind)
}

fn body_text(resume: &Resume, kind: SectionKind) -> String {
    match resume.sections.content(kind) {
        Some(content) => content.trim().to_string(),
        None => format!("{} not provided", kind.display_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_resume() -> Resume {
        let mut resume = Resume::new("Test Resume");
        resume.write_section(SectionKind::Name, "Jane Doe", false);
        resume.write_section(SectionKind::Title, "Staff Engineer", false);
        resume.write_section(SectionKind::Summary, "Ten years of systems work.", true);
        resume.write_section(SectionKind::Skills, "Rust, SQL, Linux", true);
        resume.write_section(SectionKind::Experience, "Acme Corp, 2016-2026.", true);
        resume.write_section(SectionKind::Projects, "Built a build system.", true);
        resume.write_section(SectionKind::Education, "BSc Computer Science", true);
        resume
    }

    #[test]
    fn rendered_resume_starts_with_name_and_title() {
        let text = render_formatted_resume(&full_resume());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Jane Doe"));
        assert_eq!(lines.next(), Some("Staff Engineer"));
    }

    #[test]
    fn rendered_resume_contains_all_headings_in_order() {
        let text = render_formatted_resume(&full_resume());
        let headings = [
            "PROFESSIONAL SUMMARY",
            "TECHNICAL SKILLS",
            "PROFESSIONAL EXPERIENCE",
            "KEY PROJECTS",
            "EDUCATION",
        ];

        let mut last = 0;
        for heading in headings {
            let pos = text[last..]
                .find(heading)
                .unwrap_or_else(|| panic!("missing heading {heading}"));
            last += pos;
        }
    }

    #[test]
    fn missing_sections_render_placeholders() {
        let mut resume = Resume::new("Test Resume");
        resume.write_section(SectionKind::Name, "Jane Doe", false);

        let text = render_formatted_resume(&resume);
        assert!(text.contains("Professional Title not provided"));
        assert!(text.contains("Summary not provided"));
        assert!(text.contains("Education not provided"));
    }

    #[test]
    fn rendered_resume_ends_with_generation_footer() {
        let text = render_formatted_resume(&full_resume());
        assert!(text.lines().last().unwrap().starts_with("Generated on "));
    }
}
