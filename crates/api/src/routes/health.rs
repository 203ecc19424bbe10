use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of a health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process can respond at all.
    pub status: &'static str,
    /// Version baked in at compile time.
    pub version: &'static str,
}

/// GET /health -- returns service health.
///
/// The store is purely in-memory, so there is no dependency to probe;
/// a reachable process is a healthy one.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes (root-level, alongside `/movies`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
