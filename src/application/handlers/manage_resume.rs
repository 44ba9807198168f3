//! ManageResume handler - create, fetch, list, and delete resumes.

use std::sync::Arc;

use crate::domain::foundation::ResumeId;
use crate::domain::resume::Resume;
use crate::ports::{ChatRepository, ResumeRepository, StorageError};

/// CRUD operations on resume documents.
pub struct ManageResumeHandler {
    resumes: Arc<dyn ResumeRepository>,
    chats: Arc<dyn ChatRepository>,
}

impl ManageResumeHandler {
    /// Creates the handler over its collaborators.
    pub fn new(resumes: Arc<dyn ResumeRepository>, chats: Arc<dyn ChatRepository>) -> Self {
        Self { resumes, chats }
    }

    /// Creates a new resume with an empty section table.
    pub async fn create(&self, title: &str) -> Result<Resume, StorageError> {
        let resume = Resume::new(title);
        self.resumes.create(&resume).await?;
        tracing::info!(resume_id = %resume.id, "resume created");
        Ok(resume)
    }

    /// Fetches a resume by id.
    pub async fn get(&self, id: ResumeId) -> Result<Option<Resume>, StorageError> {
        self.resumes.find_by_id(id).await
    }

    /// Lists all resumes, newest first.
    pub async fn list(&self) -> Result<Vec<Resume>, StorageError> {
        self.resumes.find_all().await
    }

    /// Deletes a resume and its chat history.
    pub async fn delete(&self, id: ResumeId) -> Result<(), StorageError> {
        self.resumes.delete(id).await?;
        self.chats.delete_for_resume(id).await?;
        tracing::info!(resume_id = %id, "resume deleted");
        Ok(())
    }
}
