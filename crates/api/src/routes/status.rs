//! Route definitions for status and history queries.

use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// GET    /devices/{device_id}/status  -> device_status
/// GET    /patients/status             -> patients_status
/// GET    /patients/{id}/readings      -> patient_readings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/devices/{device_id}/status", get(status::device_status))
        .route("/patients/status", get(status::patients_status))
        .route("/patients/{id}/readings", get(status::patient_readings))
}
