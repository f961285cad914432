use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d400_raid_dashboard::dto::DashboardRequest;
use contracts::domain::a003_raid_group::aggregate::GroupOverview;

use super::upstream_error;
use crate::domain::a003_raid_group;
use crate::shared::sheets::FetchOptions;
use crate::system::app_state::AppState;

/// GET /api/raid/groups
pub async fn list_all(
    State(state): State<AppState>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<Vec<GroupOverview>>, StatusCode> {
    a003_raid_group::service::get_group_overview(&state.sheets, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("group overview", e))
}
