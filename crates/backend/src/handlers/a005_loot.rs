use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d400_raid_dashboard::dto::DashboardRequest;
use contracts::domain::a005_loot::aggregate::LootEntry;

use super::upstream_error;
use crate::domain::a005_loot;
use crate::shared::sheets::FetchOptions;
use crate::system::app_state::AppState;

/// GET /api/loot/archive
pub async fn list_all(
    State(state): State<AppState>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<Vec<LootEntry>>, StatusCode> {
    a005_loot::service::get_loot_archive(&state.sheets, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("loot archive", e))
}
