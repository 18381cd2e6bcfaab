use serde::Serialize;
use sqlx::FromRow;
use vigil_core::types::{DbId, Timestamp};

/// One enriched sensor reading. Immutable once created; `alert_level`,
/// `is_emergency`, `room_detected`, and the fall fields are derived by the
/// ingestion pipeline before insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SensorReading {
    pub id: DbId,
    pub patient_id: DbId,
    pub device_id: DbId,
    pub recorded_at: Timestamp,
    pub heart_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub blood_pressure_systolic: Option<f64>,
    pub blood_pressure_diastolic: Option<f64>,
    pub respiratory_rate: Option<f64>,
    pub body_temperature: Option<f64>,
    pub room_temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ecg_value: Option<f64>,
    pub ecg_leads_connected: bool,
    pub ecg_status: String,
    pub ecg_data: Option<String>,
    pub fall_detected: bool,
    pub fall_confidence: f64,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
    pub gps_accuracy: Option<f64>,
    pub room_detected: String,
    pub location_confidence: f64,
    pub emergency_button_pressed: bool,
    pub battery_level: Option<f64>,
    pub signal_strength: Option<i32>,
    pub alert_level: String,
    pub is_emergency: bool,
}

/// Column values for inserting one reading (`recorded_at` defaults to the
/// insert time).
#[derive(Debug, Clone)]
pub struct CreateReading {
    pub patient_id: DbId,
    pub device_id: DbId,
    pub heart_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub blood_pressure_systolic: Option<f64>,
    pub blood_pressure_diastolic: Option<f64>,
    pub respiratory_rate: Option<f64>,
    pub body_temperature: Option<f64>,
    pub room_temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ecg_value: Option<f64>,
    pub ecg_leads_connected: bool,
    pub ecg_status: String,
    pub ecg_data: Option<String>,
    pub fall_detected: bool,
    pub fall_confidence: f64,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
    pub gps_accuracy: Option<f64>,
    pub room_detected: String,
    pub location_confidence: f64,
    pub emergency_button_pressed: bool,
    pub battery_level: Option<f64>,
    pub signal_strength: Option<i32>,
    pub alert_level: String,
    pub is_emergency: bool,
}
