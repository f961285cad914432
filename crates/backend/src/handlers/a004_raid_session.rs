use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d400_raid_dashboard::dto::DashboardRequest;
use contracts::domain::a004_raid_session::aggregate::RaidSession;

use super::upstream_error;
use crate::domain::a004_raid_session;
use crate::shared::sheets::FetchOptions;
use crate::system::app_state::AppState;

/// GET /api/raid/archive
pub async fn list_all(
    State(state): State<AppState>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<Vec<RaidSession>>, StatusCode> {
    a004_raid_session::service::get_raid_archive(&state.sheets, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("raid archive", e))
}
