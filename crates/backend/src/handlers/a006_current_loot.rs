use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d400_raid_dashboard::dto::DashboardRequest;
use contracts::domain::a006_current_loot::aggregate::CurrentLootEntry;

use super::upstream_error;
use crate::domain::a006_current_loot;
use crate::shared::sheets::FetchOptions;
use crate::system::app_state::AppState;

/// GET /api/loot/current
pub async fn list_all(
    State(state): State<AppState>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<Vec<CurrentLootEntry>>, StatusCode> {
    a006_current_loot::service::get_current_loot(&state.sheets, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("current loot", e))
}
