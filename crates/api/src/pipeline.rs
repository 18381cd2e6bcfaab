//! Sensor ingestion pipeline.
//!
//! One payload flows through device resolution, enrichment (fall
//! interpretation, room resolution, vital evaluation), a transactional
//! write of the reading plus any alert, and finally a broadcast on the
//! event bus. The broadcast happens only after the commit, so observers
//! never see a reading that failed to persist.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;
use vigil_core::aggregate;
use vigil_core::alert::AlertLevel;
use vigil_core::error::CoreError;
use vigil_core::fall;
use vigil_core::geofence::{GeofenceMap, RoomFix};
use vigil_core::labels::MessageLabels;
use vigil_core::vitals::{self, VitalSnapshot, VitalThresholds};
use vigil_db::models::{CreateAlert, CreateReading};
use vigil_db::repositories::{AlertRepo, DeviceRepo, PatientRepo, ReadingRepo};
use vigil_db::DbPool;
use vigil_events::{EventBus, ReadingSnapshot, SensorUpdate};

use crate::error::AppResult;

/// Battery percentage assumed for the device liveness update when the
/// payload omits `battery_level`. The stored reading keeps the raw value.
const DEFAULT_BATTERY_LEVEL: f64 = 100.0;

/// Signal strength (dBm) assumed for the liveness update when the payload
/// omits `signal_strength`.
const DEFAULT_SIGNAL_STRENGTH: i32 = -50;

/// Room value stored when a payload carries no usable GPS fix.
const NO_FIX_ROOM: &str = "Unknown";

/// Inbound sensor payload as posted by bedside devices.
///
/// Field names follow the device firmware wire format (`bp_systolic`,
/// `gps_lat`), which differs from the storage column names. All channels
/// are optional; firmware revisions vary in what they send.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SensorPayload {
    #[validate(length(min = 1, message = "device_id must not be empty"))]
    pub device_id: String,
    pub heart_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub bp_systolic: Option<f64>,
    pub bp_diastolic: Option<f64>,
    pub respiratory_rate: Option<f64>,
    pub body_temperature: Option<f64>,
    pub room_temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ecg_value: Option<f64>,
    #[serde(default)]
    pub ecg_leads_connected: bool,
    #[serde(default = "default_ecg_status")]
    pub ecg_status: String,
    pub ecg_data: Option<String>,
    /// Raw fall-channel value; firmware has shipped this as a bool, a 0/1
    /// integer, and a string. Interpreted by [`fall::interpret`].
    pub fall_detected: Option<Value>,
    pub gps_lat: Option<f64>,
    pub gps_lng: Option<f64>,
    pub gps_accuracy: Option<f64>,
    #[serde(default)]
    pub emergency_button_pressed: bool,
    pub battery_level: Option<f64>,
    pub signal_strength: Option<i32>,
}

fn default_ecg_status() -> String {
    "Normal".to_string()
}

/// What the ingest endpoint reports back to the device.
#[derive(Debug, Clone, Serialize)]
pub struct IngestSummary {
    pub alert_level: AlertLevel,
    pub fall_detected: bool,
    pub room_detected: String,
}

/// Run one payload through the full ingestion pipeline.
///
/// Resolution order: device by its external ID, then the patient assigned
/// to that device. Either missing is a 404 and nothing is written. The
/// reading and any derived alert commit in one transaction.
pub async fn process(
    pool: &DbPool,
    event_bus: &EventBus,
    payload: SensorPayload,
) -> AppResult<IngestSummary> {
    let device = DeviceRepo::find_by_external_id(pool, &payload.device_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Device", &payload.device_id))?;

    let patient = PatientRepo::find_by_device(pool, device.id)
        .await?
        .ok_or_else(|| CoreError::not_found("Patient for device", &payload.device_id))?;

    // Liveness defaults apply here only; the stored reading keeps the raw
    // payload values, absent channels included.
    DeviceRepo::touch_liveness(
        pool,
        device.id,
        payload.battery_level.unwrap_or(DEFAULT_BATTERY_LEVEL),
        payload.signal_strength.unwrap_or(DEFAULT_SIGNAL_STRENGTH),
    )
    .await?;

    let fall = fall::interpret(payload.fall_detected.as_ref());

    let room = match (payload.gps_lat, payload.gps_lng) {
        (Some(lat), Some(lng)) => GeofenceMap::default().resolve(lat, lng),
        _ => RoomFix {
            room: NO_FIX_ROOM.to_string(),
            confidence: 0.0,
        },
    };

    let labels = MessageLabels::default();
    let assessment = vitals::evaluate(
        &VitalSnapshot {
            heart_rate: payload.heart_rate,
            body_temperature: payload.body_temperature,
            oxygen_saturation: payload.oxygen_saturation,
            room_temperature: payload.room_temperature,
            humidity: payload.humidity,
            ecg_value: payload.ecg_value,
            ecg_leads_connected: payload.ecg_leads_connected,
        },
        &VitalThresholds::default(),
        &labels,
    );
    let outcome = aggregate::aggregate(assessment, fall, payload.emergency_button_pressed, &labels);

    let create = CreateReading {
        patient_id: patient.id,
        device_id: device.id,
        heart_rate: payload.heart_rate,
        oxygen_saturation: payload.oxygen_saturation,
        blood_pressure_systolic: payload.bp_systolic,
        blood_pressure_diastolic: payload.bp_diastolic,
        respiratory_rate: payload.respiratory_rate,
        body_temperature: payload.body_temperature,
        room_temperature: payload.room_temperature,
        humidity: payload.humidity,
        ecg_value: payload.ecg_value,
        ecg_leads_connected: payload.ecg_leads_connected,
        ecg_status: payload.ecg_status,
        ecg_data: payload.ecg_data,
        fall_detected: fall.detected,
        fall_confidence: fall.confidence,
        gps_latitude: payload.gps_lat,
        gps_longitude: payload.gps_lng,
        gps_accuracy: payload.gps_accuracy,
        room_detected: room.room,
        location_confidence: room.confidence,
        emergency_button_pressed: payload.emergency_button_pressed,
        battery_level: payload.battery_level,
        signal_strength: payload.signal_strength,
        alert_level: outcome.level.as_str().to_string(),
        is_emergency: outcome.is_emergency,
    };

    let mut tx = pool.begin().await?;

    let reading = ReadingRepo::create(&mut *tx, &create).await?;

    let alert = match outcome.alert_type {
        Some(alert_type) => {
            let message = aggregate::compose_message(&patient.name, &outcome.fragments, &labels);
            Some(
                AlertRepo::create(
                    &mut *tx,
                    &CreateAlert {
                        patient_id: patient.id,
                        device_id: device.id,
                        alert_type,
                        severity: outcome.level,
                        message,
                    },
                )
                .await?,
            )
        }
        None => None,
    };

    tx.commit().await?;

    if let Some(alert) = &alert {
        tracing::warn!(
            alert_id = alert.id,
            patient_id = patient.id,
            severity = %alert.severity,
            alert_type = %alert.alert_type,
            "Alert created from sensor reading"
        );
    }

    event_bus.publish(SensorUpdate {
        patient_id: patient.id,
        patient_name: patient.name.clone(),
        reading: ReadingSnapshot::from(&reading),
    });

    Ok(IngestSummary {
        alert_level: outcome.level,
        fall_detected: fall.detected,
        room_detected: reading.room_detected,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
