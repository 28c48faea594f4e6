//! Route definitions for stress prediction.

use axum::routing::post;
use axum::Router;

use crate::handlers::predict;
use crate::state::AppState;

/// Prediction routes mounted at the root.
///
/// ```text
/// POST /predict -> predict
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/predict", post(predict::predict))
}
