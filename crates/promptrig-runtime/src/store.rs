//! File-backed conversation persistence.
//!
//! One pretty-printed JSON file per saved conversation, named after the
//! record with path-hostile characters replaced.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use promptrig_core::domain::ConversationRecord;
use promptrig_core::ports::{ConversationStorePort, StoreError};
use tracing::debug;

/// `ConversationStorePort` implementation writing JSON files under one
/// directory. The directory is created on first save.
pub struct FileConversationStore {
    dir: PathBuf,
}

impl FileConversationStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Turn a record name into a safe file stem.
///
/// Alphanumerics, `-`, `_`, `.`, and `:` pass through; everything else
/// (separators included) becomes `-`. Leading/trailing dots are stripped so
/// a name can neither hide the file nor climb out of the directory.
fn sanitize_name(name: &str) -> Result<String, StoreError> {
    let base = name.trim();
    let base = if base.is_empty() { "unnamed" } else { base };
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':') {
                c
            } else {
                '-'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(cleaned.to_string())
}

#[async_trait]
impl ConversationStorePort for FileConversationStore {
    async fn save(&self, record: &ConversationRecord) -> Result<String, StoreError> {
        let filename = format!("{}.json", sanitize_name(&record.name)?);

        let mut on_disk = record.clone();
        on_disk.saved_at = Some(Utc::now());
        let body = serde_json::to_vec_pretty(&on_disk)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        let path = self.dir.join(&filename);
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        debug!(path = %path.display(), "Saved conversation");
        Ok(filename)
    }
}
