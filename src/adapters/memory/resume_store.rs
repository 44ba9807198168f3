//! In-memory resume repository.
//!
//! Stands in for the external document store in tests and the demo
//! binary.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ResumeId;
use crate::domain::resume::Resume;
use crate::ports::{ResumeRepository, StorageError};

/// In-memory storage for resumes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResumeStore {
    resumes: Arc<RwLock<HashMap<ResumeId, Resume>>>,
}

impl InMemoryResumeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored resumes.
    pub async fn count(&self) -> usize {
        self.resumes.read().await.len()
    }
}

#[async_trait]
impl ResumeRepository for InMemoryResumeStore {
    async fn create(&self, resume: &Resume) -> Result<(), StorageError> {
        let mut resumes = self.resumes.write().await;
        resumes.insert(resume.id, resume.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ResumeId) -> Result<Option<Resume>, StorageError> {
        Ok(self.resumes.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Resume>, StorageError> {
        let resumes = self.resumes.read().await;
        let mut all: Vec<Resume> = resumes.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(&self, resume: &Resume) -> Result<(), StorageError> {
        let mut resumes = self.resumes.write().await;
        match resumes.get_mut(&resume.id) {
            Some(existing) => {
                *existing = resume.clone();
                Ok(())
            }
            None => Err(StorageError::NotFound(resume.id)),
        }
    }

    async fn delete(&self, id: ResumeId) -> Result<(), StorageError> {
        let mut resumes = self.resumes.write().await;
        resumes.remove(&id).map(|_| ()).ok_or(StorageError::NotFound(id))
    }
}
