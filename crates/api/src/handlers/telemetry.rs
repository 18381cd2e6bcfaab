//! Handler for the sensor ingestion endpoint.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::pipeline::{self, SensorPayload};
use crate::state::AppState;

/// POST /api/v1/sensor-data
///
/// Ingest one payload from a bedside device. The response carries the
/// derived alert level, fall flag, and resolved room so the firmware can
/// drive its local indicators without waiting for a dashboard round trip.
pub async fn ingest_reading(
    State(state): State<AppState>,
    Json(payload): Json<SensorPayload>,
) -> AppResult<Json<serde_json::Value>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let summary = pipeline::process(&state.pool, &state.event_bus, payload).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "alert_level": summary.alert_level,
        "fall_detected": summary.fall_detected,
        "room_detected": summary.room_detected,
    })))
}
