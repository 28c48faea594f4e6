pub mod health;
pub mod predict;

use axum::Router;

use crate::state::AppState;

/// Build the root route tree.
///
/// ```text
/// GET  /health    liveness payload
/// POST /predict   score one set of vitals
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(predict::router())
}
