use axum::extract::State;
use axum::http::StatusCode;

use crate::system::app_state::AppState;

/// POST /api/cache/clear
pub async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.sheets.clear_cache().await;
    StatusCode::NO_CONTENT
}
