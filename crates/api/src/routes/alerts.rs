//! Route definitions for the `/alerts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET    /unacknowledged      -> list_unacknowledged
/// POST   /{id}/acknowledge    -> acknowledge
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/unacknowledged", get(alerts::list_unacknowledged))
        .route("/{id}/acknowledge", post(alerts::acknowledge))
}
