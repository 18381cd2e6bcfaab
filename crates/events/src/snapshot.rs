//! Curated wire shape for one stored reading.

use serde::Serialize;
use vigil_core::types::Timestamp;
use vigil_db::models::SensorReading;

/// The subset of reading fields shared by the WebSocket broadcast and the
/// read-path responses.
///
/// A dashboard sees the same shape no matter whether a value arrived over
/// the socket or from a status poll.
#[derive(Debug, Clone, Serialize)]
pub struct ReadingSnapshot {
    pub heart_rate: Option<f64>,
    pub body_temperature: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    /// `"systolic/diastolic"`, present only when both halves were reported.
    pub blood_pressure: Option<String>,
    pub respiratory_rate: Option<f64>,
    pub room_temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ecg_value: Option<f64>,
    pub ecg_leads_connected: bool,
    pub ecg_status: String,
    pub fall_detected: bool,
    pub fall_confidence: f64,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
    pub room_detected: String,
    pub emergency_button_pressed: bool,
    pub alert_level: String,
    /// When the reading was recorded, not when it was broadcast.
    pub timestamp: Timestamp,
}

impl From<&SensorReading> for ReadingSnapshot {
    fn from(reading: &SensorReading) -> Self {
        let blood_pressure = match (
            reading.blood_pressure_systolic,
            reading.blood_pressure_diastolic,
        ) {
            (Some(sys), Some(dia)) => Some(format!("{sys}/{dia}")),
            _ => None,
        };

        Self {
            heart_rate: reading.heart_rate,
            body_temperature: reading.body_temperature,
            oxygen_saturation: reading.oxygen_saturation,
            blood_pressure,
            respiratory_rate: reading.respiratory_rate,
            room_temperature: reading.room_temperature,
            humidity: reading.humidity,
            ecg_value: reading.ecg_value,
            ecg_leads_connected: reading.ecg_leads_connected,
            ecg_status: reading.ecg_status.clone(),
            fall_detected: reading.fall_detected,
            fall_confidence: reading.fall_confidence,
            gps_latitude: reading.gps_latitude,
            gps_longitude: reading.gps_longitude,
            room_detected: reading.room_detected.clone(),
            emergency_button_pressed: reading.emergency_button_pressed,
            alert_level: reading.alert_level.clone(),
            timestamp: reading.recorded_at,
        }
    }
}
