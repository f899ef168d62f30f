//! Conversation persistence handler.

use axum::Json;
use axum::extract::State;
use promptrig_core::domain::ConversationRecord;

use crate::dto::SaveConversationResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Save a finished conversation, attaching host facts first.
pub async fn save(
    State(state): State<AppState>,
    Json(mut record): Json<ConversationRecord>,
) -> Result<Json<SaveConversationResponse>, HttpError> {
    record.system_info = Some(state.probe.system_report());
    let filename = state.store.save(&record).await?;
    Ok(Json(SaveConversationResponse { filename }))
}
