//! Host information handler.

use axum::Json;
use axum::extract::State;

use crate::dto::SystemReportDto;
use crate::state::AppState;

/// Report host hardware facts.
pub async fn report(State(state): State<AppState>) -> Json<SystemReportDto> {
    Json(state.probe.system_report().into())
}
