pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::analysis::handlers::{handle_analyze, MAX_UPLOAD_BYTES};
use crate::state::AppState;

/// Browser origins allowed to call the API during local development.
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(ALLOWED_ORIGINS.map(|origin| {
            origin
                .parse::<HeaderValue>()
                .expect("static origin must parse")
        }))
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/analyze", post(handle_analyze))
        // Multipart framing adds a little overhead on top of the 10 MiB file cap,
        // so oversize uploads reach the handler's own check instead of buffering unbounded.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
