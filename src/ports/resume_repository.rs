//! Resume repository port.
//!
//! Contract for the document store holding resumes, keyed by id. The core
//! treats persistence as a collaborator; saves are atomic-or-nothing from
//! its perspective.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ResumeId;
use crate::domain::resume::Resume;

/// Failures from the persistence collaborators.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// No document for the given id.
    #[error("resume not found: {0}")]
    NotFound(ResumeId),

    /// Backend failure while reading or writing.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Repository port for resume documents.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Persists a new resume.
    async fn create(&self, resume: &Resume) -> Result<(), StorageError>;

    /// Finds a resume by id. Returns `None` if absent.
    async fn find_by_id(&self, id: ResumeId) -> Result<Option<Resume>, StorageError>;

    /// Lists all resumes, newest first.
    async fn find_all(&self) -> Result<Vec<Resume>, StorageError>;

    /// Replaces an existing resume.
    ///
    /// # Errors
    ///
    /// `NotFound` if the resume does not exist.
    async fn update(&self, resume: &Resume) -> Result<(), StorageError>;

    /// Deletes a resume.
    ///
    /// # Errors
    ///
    /// `NotFound` if the resume does not exist.
    async fn delete(&self, id: ResumeId) -> Result<(), StorageError>;
}
