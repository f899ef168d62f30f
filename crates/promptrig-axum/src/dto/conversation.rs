//! Conversation persistence DTOs.
//!
//! The save request body deserializes straight into the core
//! `ConversationRecord`; only the response needs its own shape.

use serde::Serialize;

/// Response body after saving a conversation.
#[derive(Debug, Serialize)]
pub struct SaveConversationResponse {
    /// Filename the record was written under.
    pub filename: String,
}
