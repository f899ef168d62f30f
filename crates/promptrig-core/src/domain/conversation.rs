//! Conversation records persisted by the boundary layer.
//!
//! A record is request-scoped: the client submits the whole record when it
//! decides to save, and the boundary attaches host facts at save time. The
//! core never accumulates conversation state across requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::prompt::MetricsMap;
use super::system::SystemReport;

/// One prompt/response pair within a saved conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptExchange {
    pub prompt: String,
    pub response: String,
    #[serde(default)]
    pub metrics: MetricsMap,
}

/// A named, saveable conversation with one model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    /// Display name; also the basis of the on-disk filename (sanitized).
    pub name: String,
    /// Model the prompts were run against.
    pub model: String,
    pub prompts: Vec<PromptExchange>,
    /// Host facts, attached by the boundary when the record is saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_info: Option<SystemReport>,
    /// Stamped by the store at write time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}
