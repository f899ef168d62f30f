//! Conversation store port definition.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ConversationRecord;

/// Errors that can occur while persisting a conversation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record's name cannot be turned into a usable filename.
    #[error("Invalid conversation name: {0}")]
    InvalidName(String),

    /// Filesystem failure.
    #[error("Storage error: {0}")]
    Io(String),

    /// The record could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Port for persisting finished conversations.
///
/// Implementations handle the storage mechanism (JSON files, etc.). The core
/// never persists anything itself.
#[async_trait]
pub trait ConversationStorePort: Send + Sync {
    /// Persist a record and return the name it was stored under.
    async fn save(&self, record: &ConversationRecord) -> Result<String, StoreError>;
}
