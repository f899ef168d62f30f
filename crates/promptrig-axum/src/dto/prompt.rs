//! Prompt execution DTOs.

use promptrig_core::domain::{MetricsMap, PromptReply};
use serde::{Deserialize, Serialize};

/// Request body for running one prompt.
#[derive(Debug, Deserialize)]
pub struct RunPromptRequest {
    pub model: String,
    pub prompt: String,
}

/// Response body for a finished prompt run.
#[derive(Debug, Serialize)]
pub struct PromptReplyDto {
    /// Cleaned model output; empty when the model produced only metrics.
    pub response: String,
    /// Counters in first-seen order, raw values.
    pub metrics: MetricsMap,
}

impl From<PromptReply> for PromptReplyDto {
    fn from(reply: PromptReply) -> Self {
        Self {
            response: reply.response,
            metrics: reply.metrics,
        }
    }
}
