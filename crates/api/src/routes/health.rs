use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Identifier for the scoring implementation reported by the health check.
pub const MODEL_NAME: &str = "rule-based-v1";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Scoring model identifier.
    pub model: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- static liveness payload.
///
/// The scorer holds no state and has no dependencies, so there is nothing
/// deeper to probe.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model: MODEL_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
