//! ResumeStatus handler - completion report for a stored resume.

use std::sync::Arc;

use crate::application::responses::CompletionStatusResponse;
use crate::domain::foundation::ResumeId;
use crate::domain::resume::completion_report;
use crate::ports::ResumeRepository;

/// Reports how complete a resume is, including the rendered text once
/// every section is filled.
pub struct ResumeStatusHandler {
    resumes: Arc<dyn ResumeRepository>,
}

impl ResumeStatusHandler {
    /// Creates the handler over the resume store.
    pub fn new(resumes: Arc<dyn ResumeRepository>) -> Self {
        Self { resumes }
    }

    /// Builds the completion status for a resume.
    pub async fn handle(&self, resume_id: ResumeId) -> CompletionStatusResponse {
        let resume = match self.resumes.find_by_id(resume_id).await {
            Ok(Some(resume)) => resume,
            Ok(None) => return CompletionStatusResponse::failure("Resume not found"),
            Err(err) => {
                tracing::warn!(%resume_id, error = %err, "status lookup failed");
                return CompletionStatusResponse::failure(err.to_string());
            }
        };

        CompletionStatusResponse::from_report(&resume, completion_report(&resume))
    }
}
