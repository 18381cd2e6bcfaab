//! Repository for the append-only `sensor_readings` table.

use sqlx::{PgExecutor, PgPool};
use vigil_core::types::{DbId, Timestamp};

use crate::models::reading::{CreateReading, SensorReading};

const READING_COLUMNS: &str = "\
    id, patient_id, device_id, recorded_at, heart_rate, oxygen_saturation, \
    blood_pressure_systolic, blood_pressure_diastolic, respiratory_rate, \
    body_temperature, room_temperature, humidity, ecg_value, \
    ecg_leads_connected, ecg_status, ecg_data, fall_detected, \
    fall_confidence, gps_latitude, gps_longitude, gps_accuracy, \
    room_detected, location_confidence, emergency_button_pressed, \
    battery_level, signal_strength, alert_level, is_emergency";

pub struct ReadingRepo;

impl ReadingRepo {
    /// Insert one enriched reading.
    ///
    /// Generic over the executor so the ingestion pipeline can run it inside
    /// the same transaction as the alert insert.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        reading: &CreateReading,
    ) -> Result<SensorReading, sqlx::Error> {
        let query = format!(
            "INSERT INTO sensor_readings (\
                 patient_id, device_id, heart_rate, oxygen_saturation, \
                 blood_pressure_systolic, blood_pressure_diastolic, \
                 respiratory_rate, body_temperature, room_temperature, \
                 humidity, ecg_value, ecg_leads_connected, ecg_status, \
                 ecg_data, fall_detected, fall_confidence, gps_latitude, \
                 gps_longitude, gps_accuracy, room_detected, \
                 location_confidence, emergency_button_pressed, \
                 battery_level, signal_strength, alert_level, is_emergency) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, \
                 $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, \
                 $24, $25, $26) \
             RETURNING {READING_COLUMNS}"
        );
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(reading.patient_id)
            .bind(reading.device_id)
            .bind(reading.heart_rate)
            .bind(reading.oxygen_saturation)
            .bind(reading.blood_pressure_systolic)
            .bind(reading.blood_pressure_diastolic)
            .bind(reading.respiratory_rate)
            .bind(reading.body_temperature)
            .bind(reading.room_temperature)
            .bind(reading.humidity)
            .bind(reading.ecg_value)
            .bind(reading.ecg_leads_connected)
            .bind(&reading.ecg_status)
            .bind(&reading.ecg_data)
            .bind(reading.fall_detected)
            .bind(reading.fall_confidence)
            .bind(reading.gps_latitude)
            .bind(reading.gps_longitude)
            .bind(reading.gps_accuracy)
            .bind(&reading.room_detected)
            .bind(reading.location_confidence)
            .bind(reading.emergency_button_pressed)
            .bind(reading.battery_level)
            .bind(reading.signal_strength)
            .bind(&reading.alert_level)
            .bind(reading.is_emergency)
            .fetch_one(executor)
            .await
    }

    /// Most recent reading for a patient, if any.
    pub async fn latest_for_patient(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Option<SensorReading>, sqlx::Error> {
        let query = format!(
            "SELECT {READING_COLUMNS} FROM sensor_readings \
             WHERE patient_id = $1 ORDER BY recorded_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(patient_id)
            .fetch_optional(pool)
            .await
    }

    /// Readings at or after `since`, newest first, unbounded.
    pub async fn for_patient_since(
        pool: &PgPool,
        patient_id: DbId,
        since: Timestamp,
    ) -> Result<Vec<SensorReading>, sqlx::Error> {
        let query = format!(
            "SELECT {READING_COLUMNS} FROM sensor_readings \
             WHERE patient_id = $1 AND recorded_at >= $2 \
             ORDER BY recorded_at DESC"
        );
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(patient_id)
            .bind(since)
            .fetch_all(pool)
            .await
    }
}
