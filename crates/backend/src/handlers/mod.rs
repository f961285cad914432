pub mod a001_raid_member;
pub mod a002_points;
pub mod a003_raid_group;
pub mod a004_raid_session;
pub mod a005_loot;
pub mod a006_current_loot;
pub mod d400_raid_dashboard;
pub mod p900_player_loot;
pub mod system;

use axum::http::StatusCode;
use contracts::dashboards::d400_raid_dashboard::dto::DashboardRequest;

use crate::shared::sheets::{FetchOptions, TransportError};

/// `?force=true` bypasses the response cache on every read endpoint
impl From<&DashboardRequest> for FetchOptions {
    fn from(request: &DashboardRequest) -> Self {
        FetchOptions::forced(request.force)
    }
}

/// Spreadsheet failures are upstream failures for our clients
pub(crate) fn upstream_error(what: &str, e: TransportError) -> StatusCode {
    tracing::error!("Failed to load {}: {}", what, e);
    StatusCode::BAD_GATEWAY
}
