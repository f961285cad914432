use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use backend::shared::config;
use backend::shared::sheets::SheetsService;
use backend::system::app_state::AppState;

// Логирование запросов: время, статус, метод, путь
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        "{:>5}ms | {} {:>6} {}",
        start.elapsed().as_millis(),
        response.status().as_u16(),
        method,
        path
    );
    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional, real environment wins
    let _ = dotenvy::dotenv();

    backend::system::tracing::initialize()?;

    let config = config::load_config()?;
    let sheets = SheetsService::from_config(&config)
        .map_err(|e| anyhow::anyhow!("sheets client init failed: {e}"))?;
    if sheets.spreadsheet_id().is_empty() {
        tracing::warn!("No spreadsheet configured, all ranges will be empty");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = backend::routes::configure_routes(AppState::new(sheets))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Raid dashboard backend listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
