use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d400_raid_dashboard::dto::DashboardRequest;
use contracts::domain::a002_points::aggregate::PointsEntry;

use super::upstream_error;
use crate::domain::a002_points;
use crate::shared::sheets::FetchOptions;
use crate::system::app_state::AppState;

/// GET /api/raid/points
pub async fn list_all(
    State(state): State<AppState>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<Vec<PointsEntry>>, StatusCode> {
    a002_points::service::get_points(&state.sheets, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("points", e))
}
