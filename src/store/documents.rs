// src/store/documents.rs
//! Filesystem store for generated documents. One file per document under
//! {documents_path}/{user_id}/, named by type and generation timestamp.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use tracing::info;

use crate::utils::normalize_user_id;

pub struct DocumentStore {
    base_path: PathBuf,
}

impl DocumentStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn user_dir(&self, user_id: &str) -> PathBuf {
        self.base_path.join(normalize_user_id(user_id))
    }

    /// Persist a generated document and return its storage path
    pub async fn save(
        &self,
        user_id: &str,
        document_type: &str,
        content: &str,
    ) -> Result<PathBuf> {
        let dir = self.user_dir(user_id);
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create document directory: {}", dir.display()))?;

        let filename = format!(
            "{}_{}.txt",
            document_type,
            Utc::now().format("%Y%m%d_%H%M%S")
        );
        let path = dir.join(filename);

        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write document: {}", path.display()))?;

        info!("Saved {} document at: {}", document_type, path.display());
        Ok(path)
    }

    /// Read a stored document back
    pub async fn load(&self, path: &PathBuf) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read document: {}", path.display()))
    }

    /// List stored document paths for a user, if any
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<PathBuf>> {
        let dir = self.user_dir(user_id);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .with_context(|| format!("Failed to list documents in: {}", dir.display()))?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();

        Ok(paths)
    }
}
