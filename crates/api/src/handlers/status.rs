//! Handlers for patient status and reading history queries.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use vigil_core::error::CoreError;
use vigil_core::types::DbId;
use vigil_db::repositories::{DeviceRepo, PatientRepo, ReadingRepo};
use vigil_events::ReadingSnapshot;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /patients/{id}/readings`.
#[derive(Debug, Deserialize)]
pub struct ReadingsQuery {
    /// History window in hours. Defaults to 24, valid range 1..=168.
    pub hours: Option<i64>,
}

/// Default history window in hours.
const DEFAULT_HOURS: i64 = 24;

/// Longest allowed history window (one week).
const MAX_HOURS: i64 = 168;

/// `data` payload for the device status view: the bound patient and their
/// latest snapshot.
#[derive(Debug, Serialize)]
pub struct DevicePatientStatus {
    pub patient_id: DbId,
    pub name: String,
    pub status: &'static str,
    pub latest_reading: Option<ReadingSnapshot>,
}

/// One entry in the active-patient roster.
#[derive(Debug, Serialize)]
pub struct PatientStatusEntry {
    pub id: DbId,
    pub name: String,
    pub status: &'static str,
    pub latest_reading: Option<ReadingSnapshot>,
}

/// GET /api/v1/devices/{device_id}/status
///
/// Report the patient bound to a device together with their latest
/// snapshot. `latest_reading` is `null` until the first reading arrives.
pub async fn device_status(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> AppResult<Json<DataResponse<DevicePatientStatus>>> {
    let device = DeviceRepo::find_by_external_id(&state.pool, &device_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Device", &device_id))?;

    let patient = PatientRepo::find_by_device(&state.pool, device.id)
        .await?
        .ok_or_else(|| CoreError::not_found("Patient for device", &device_id))?;

    let latest = ReadingRepo::latest_for_patient(&state.pool, patient.id)
        .await?
        .map(|r| ReadingSnapshot::from(&r));

    let status = patient.status();
    Ok(Json(DataResponse::new(DevicePatientStatus {
        patient_id: patient.id,
        name: patient.name,
        status,
        latest_reading: latest,
    })))
}

/// GET /api/v1/patients/status
///
/// List every active patient with their latest snapshot (or `null`).
pub async fn patients_status(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PatientStatusEntry>>>> {
    let patients = PatientRepo::list_active(&state.pool).await?;

    // One latest-reading query per patient; ward-scale patient counts keep
    // this cheap.
    let mut entries = Vec::with_capacity(patients.len());
    for patient in patients {
        let latest = ReadingRepo::latest_for_patient(&state.pool, patient.id)
            .await?
            .map(|r| ReadingSnapshot::from(&r));
        let status = patient.status();
        entries.push(PatientStatusEntry {
            id: patient.id,
            name: patient.name,
            status,
            latest_reading: latest,
        });
    }

    Ok(Json(DataResponse::new(entries)))
}

/// GET /api/v1/patients/{id}/readings
///
/// Reading history for one patient over the last `hours` hours, newest
/// first.
pub async fn patient_readings(
    State(state): State<AppState>,
    Path(patient_id): Path<DbId>,
    Query(params): Query<ReadingsQuery>,
) -> AppResult<Json<DataResponse<Vec<ReadingSnapshot>>>> {
    let hours = params.hours.unwrap_or(DEFAULT_HOURS);
    if !(1..=MAX_HOURS).contains(&hours) {
        return Err(AppError::BadRequest(format!(
            "hours must be between 1 and {MAX_HOURS}"
        )));
    }

    let patient = PatientRepo::find_by_id(&state.pool, patient_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Patient", patient_id))?;

    let since = Utc::now() - Duration::hours(hours);
    let readings = ReadingRepo::for_patient_since(&state.pool, patient.id, since).await?;
    let snapshots: Vec<ReadingSnapshot> = readings.iter().map(ReadingSnapshot::from).collect();

    Ok(Json(DataResponse::new(snapshots)))
}
