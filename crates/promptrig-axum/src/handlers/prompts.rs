//! Prompt execution handler.

use axum::Json;
use axum::extract::State;
use promptrig_core::domain::PromptRequest;

use crate::dto::{PromptReplyDto, RunPromptRequest};
use crate::error::HttpError;
use crate::state::AppState;

/// Run one prompt against a local model.
pub async fn run(
    State(state): State<AppState>,
    Json(req): Json<RunPromptRequest>,
) -> Result<Json<PromptReplyDto>, HttpError> {
    let reply = state
        .prompts
        .execute(PromptRequest::new(req.model, req.prompt))
        .await?;
    Ok(Json(reply.into()))
}
