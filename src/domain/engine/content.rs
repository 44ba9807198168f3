//! Content generation - turns raw user input into polished section text.

use std::sync::Arc;

use crate::domain::foundation::SectionKind;
use crate::domain::resume::Resume;
use crate::ports::{GenerationError, GenerationPrompt, TextGenerator};

/// Fixed system instruction for the polish step.
const WRITER_SYSTEM_PROMPT: &str = "You are a professional resume writer. \
    Create polished, professional content that enhances the user's input \
    while keeping it truthful and relevant.";

const POLISH_MAX_TOKENS: u32 = 300;
const POLISH_TEMPERATURE: f32 = 0.7;

/// Context handed to the generator so later sections can reference
/// earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ResumeContext {
    pub name: Option<String>,
    pub title: Option<String>,
}

impl ResumeContext {
    /// Extracts the generation context from a resume.
    pub fn from_resume(resume: &Resume) -> Self {
        Self {
            name: resume.candidate_name().map(str::to_string),
            title: resume.candidate_title().map(str::to_string),
        }
    }
}

/// Builds section-specific polish instructions and invokes the external
/// text-generation capability.
pub struct ContentGenerator {
    generator: Arc<dyn TextGenerator>,
}

impl ContentGenerator {
    /// Creates a content generator over the given capability.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Polishes raw input into professional section content.
    ///
    /// Fails with [`GenerationError`] when the external call fails; the
    /// caller degrades to the raw input. No retries here.
    pub async fn polish(
        &self,
        kind: SectionKind,
        raw_input: &str,
        context: &ResumeContext,
    ) -> Result<String, GenerationError> {
        let prompt = GenerationPrompt::new(
            WRITER_SYSTEM_PROMPT,
            build_instruction(kind, raw_input, context),
            POLISH_MAX_TOKENS,
            POLISH_TEMPERATURE,
        );

        let text = self.generator.generate(prompt).await?;
        Ok(text.trim().to_string())
    }
}

/// Section-specific instruction templates. Name and title have no
/// dedicated template and use the generic polish wording.
fn build_instruction(kind: SectionKind, raw_input: &str, context: &ResumeContext) -> String {
    match kind {
        SectionKind::Summary => {
            let name = context.name.as_deref().unwrap_or("a candidate");
            let title = context.title.as_deref().unwrap_or("professional");
            format!(
                "Create a professional summary for {name} who is a {title}. \
                 Based on this input: \"{raw_input}\". Make it 2-3 sentences, \
                 professional, and compelling."
            )
        }
        SectionKind::Skills => format!(
            "Format these skills professionally for a resume: \"{raw_input}\". \
             Group related skills together and present them in a clean, readable format."
        ),
        SectionKind::Experience => format!(
            "Create a professional work experience entry based on: \"{raw_input}\". \
             Include role, company (if mentioned), and 2-3 bullet points highlighting \
             achievements and responsibilities."
        ),
        SectionKind::Projects => format!(
            "Create a professional project description based on: \"{raw_input}\". \
             Include project name, brief description, and key technologies/achievements."
        ),
        SectionKind::Education => format!(
            "Format this educational background professionally: \"{raw_input}\". \
             Include degree, institution, and any relevant details."
        ),
        SectionKind::Name | SectionKind::Title => format!(
            "Polish and format this resume content professionally: \"{raw_input}\". \
             Make it concise, professional, and impactful."
        ),
    }
}
