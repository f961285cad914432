use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d400_raid_dashboard::dto::DashboardRequest;
use contracts::domain::a007_character::aggregate::PlayerCharacter;
use contracts::projections::p900_player_loot::dto::{PlayerDetailsResponse, PlayerLootEntry};

use super::upstream_error;
use crate::domain::a007_character;
use crate::projections::p900_player_loot::service;
use crate::shared::sheets::FetchOptions;
use crate::system::app_state::AppState;

/// GET /api/players/:player/characters
pub async fn get_characters(
    State(state): State<AppState>,
    Path(player): Path<String>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<Vec<PlayerCharacter>>, StatusCode> {
    a007_character::service::get_player_characters(&state.sheets, &player, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("player characters", e))
}

/// GET /api/players/:player/loot
pub async fn get_loot_history(
    State(state): State<AppState>,
    Path(player): Path<String>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<Vec<PlayerLootEntry>>, StatusCode> {
    service::get_player_loot_history(&state.sheets, &player, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("player loot", e))
}

/// GET /api/players/:player
pub async fn get_details(
    State(state): State<AppState>,
    Path(player): Path<String>,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<PlayerDetailsResponse>, StatusCode> {
    service::get_player_details(&state.sheets, &player, FetchOptions::from(&request))
        .await
        .map(Json)
        .map_err(|e| upstream_error("player details", e))
}
