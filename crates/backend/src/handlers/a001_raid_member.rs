use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d400_raid_dashboard::dto::DashboardRequest;
use contracts::domain::a001_raid_member::aggregate::RaidMember;

use super::upstream_error;
use crate::domain::a001_raid_member;
use crate::shared::sheets::FetchOptions;
use crate::system::app_state::AppState;

/// GET /api/raid/members
pub async fn list_all(
    State(state): State<AppState>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<Vec<RaidMember>>, StatusCode> {
    a001_raid_member::service::get_raid_setup(&state.sheets, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("raid setup", e))
}
