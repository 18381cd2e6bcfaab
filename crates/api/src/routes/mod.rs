pub mod alerts;
pub mod health;
pub mod status;
pub mod telemetry;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                              live telemetry WebSocket
///
/// /sensor-data                     ingest one device payload (POST)
///
/// /devices/{device_id}/status      patient bound to a device + latest reading
/// /patients/status                 all active patients + latest readings
/// /patients/{id}/readings          reading history (?hours=N)
///
/// /alerts/unacknowledged           open alerts, newest first (?limit=N)
/// /alerts/{id}/acknowledge         acknowledge one alert (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // WebSocket endpoint for dashboards.
        .route("/ws", get(ws::ws_handler))
        // Sensor ingestion.
        .merge(telemetry::router())
        // Patient and device status queries.
        .merge(status::router())
        // Alert listing and acknowledgement.
        .nest("/alerts", alerts::router())
}
