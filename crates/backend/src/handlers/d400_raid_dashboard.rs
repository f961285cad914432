use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d400_raid_dashboard::dto::{DashboardBundle, DashboardRequest, RaidStats};

use super::upstream_error;
use crate::dashboards::d400_raid_dashboard::service;
use crate::shared::sheets::FetchOptions;
use crate::system::app_state::AppState;

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<DashboardBundle>, StatusCode> {
    service::get_dashboard_bundle(&state.sheets, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("dashboard", e))
}

/// GET /api/raid/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<RaidStats>, StatusCode> {
    service::get_raid_stats(&state.sheets, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("raid stats", e))
}
