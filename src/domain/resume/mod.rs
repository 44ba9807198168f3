//! Resume aggregate, section table, progress tracking, and rendering.

mod format;
mod progress;
mod resume;
mod section;

pub use format::render_formatted_resume;
pub use progress::{completion_report, locate_step, CompletionReport, ConversationState, ConversationStep};
pub use resume::Resume;
pub use section::{Section, SectionTable};
