//! Application handlers.

mod manage_resume;
mod process_message;
mod resume_status;

pub use manage_resume::ManageResumeHandler;
pub use process_message::ProcessMessageHandler;
pub use resume_status::ResumeStatusHandler;
