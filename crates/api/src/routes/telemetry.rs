//! Route definition for sensor ingestion.

use axum::routing::post;
use axum::Router;

use crate::handlers::telemetry;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// POST   /sensor-data   -> ingest_reading
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/sensor-data", post(telemetry::ingest_reading))
}
