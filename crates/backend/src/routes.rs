use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::system::app_state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D400 Dashboard bundle (one batch request)
        // ========================================
        .route(
            "/api/dashboard",
            get(handlers::d400_raid_dashboard::get_dashboard),
        )
        .route(
            "/api/raid/stats",
            get(handlers::d400_raid_dashboard::get_stats),
        )
        // ========================================
        // Raid entities
        // ========================================
        .route(
            "/api/raid/members",
            get(handlers::a001_raid_member::list_all),
        )
        .route("/api/raid/points", get(handlers::a002_points::list_all))
        .route("/api/raid/groups", get(handlers::a003_raid_group::list_all))
        .route(
            "/api/raid/archive",
            get(handlers::a004_raid_session::list_all),
        )
        // Loot
        .route("/api/loot/archive", get(handlers::a005_loot::list_all))
        .route(
            "/api/loot/current",
            get(handlers::a006_current_loot::list_all),
        )
        // ========================================
        // P900 Player loot
        // ========================================
        .route(
            "/api/players/:player",
            get(handlers::p900_player_loot::get_details),
        )
        .route(
            "/api/players/:player/characters",
            get(handlers::p900_player_loot::get_characters),
        )
        .route(
            "/api/players/:player/loot",
            get(handlers::p900_player_loot::get_loot_history),
        )
        // System
        .route("/api/cache/clear", post(handlers::system::clear_cache))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sheets::testing::{grid, service_with, FakeTransport};
    use crate::shared::sheets::{ranges, TransportError};
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(transport: Arc<FakeTransport>) -> Router {
        let (sheets, _clock) = service_with(transport);
        configure_routes(AppState::new(sheets))
    }

    async fn call(app: Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(Arc::new(FakeTransport::new()));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_points_endpoint() {
        let transport = Arc::new(FakeTransport::new());
        transport.set_range(
            ranges::POINTS,
            grid(&[
                &["Spieler", "Punkte", "", "", "Tokens"],
                &["", "", "", "", ""],
                &["Anna", "12", "", "", "3"],
            ]),
        );

        let (status, json) = call(app(transport), Method::GET, "/api/raid/points").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["player"], "Anna");
        assert_eq!(json[0]["points"], 12);
    }

    #[tokio::test]
    async fn test_transport_failure_is_bad_gateway() {
        let transport = Arc::new(FakeTransport::new());
        transport.fail_range(ranges::LOOT_ARCHIVE, TransportError::Network("down".into()));

        let (status, _) = call(app(transport), Method::GET, "/api/loot/archive").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_force_query_bypasses_cache() {
        let transport = Arc::new(FakeTransport::new());
        let app = app(transport.clone());

        call(app.clone(), Method::GET, "/api/raid/archive").await;
        call(app.clone(), Method::GET, "/api/raid/archive?force=false").await;
        assert_eq!(transport.value_calls.load(Ordering::SeqCst), 1);

        let (status, _) = call(app, Method::GET, "/api/raid/archive?force=true").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(transport.value_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_reload() {
        let transport = Arc::new(FakeTransport::new());
        let app = app(transport.clone());

        call(app.clone(), Method::GET, "/api/loot/current").await;
        call(app.clone(), Method::GET, "/api/loot/current").await;
        assert_eq!(transport.value_calls.load(Ordering::SeqCst), 1);

        let (status, _) = call(app.clone(), Method::POST, "/api/cache/clear").await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        call(app, Method::GET, "/api/loot/current").await;
        assert_eq!(transport.value_calls.load(Ordering::SeqCst), 2);
    }
}
