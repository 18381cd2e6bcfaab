//! Integration tests for the alert repository.
//!
//! - Insert echoes the stored row with acknowledgement fields unset
//! - Unacknowledged listing is newest first and capped
//! - Acknowledgement records who and when, and tolerates repeats
//! - Reading and alert inserts share one transaction

use chrono::{Duration, Utc};
use sqlx::PgPool;
use vigil_core::types::{DbId, Timestamp};
use vigil_core::{AlertLevel, AlertType};
use vigil_db::models::alert::CreateAlert;
use vigil_db::models::reading::CreateReading;
use vigil_db::repositories::{AlertRepo, ReadingRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_device(pool: &PgPool, external_id: &str) -> DbId {
    let row: (DbId,) =
        sqlx::query_as("INSERT INTO devices (device_id, name) VALUES ($1, $2) RETURNING id")
            .bind(external_id)
            .bind(format!("Monitor {external_id}"))
            .fetch_one(pool)
            .await
            .unwrap();
    row.0
}

async fn seed_patient(pool: &PgPool, device_id: DbId, name: &str, medical_id: &str) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO patients (name, medical_id, device_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(medical_id)
    .bind(device_id)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

fn new_alert(patient_id: DbId, device_id: DbId, severity: AlertLevel) -> CreateAlert {
    CreateAlert {
        patient_id,
        device_id,
        alert_type: AlertType::VitalSigns,
        severity,
        message: "Bệnh nhân Nguyễn Văn A cảnh báo: Nhịp tim: 35 bpm".to_string(),
    }
}

/// Raw insert with a controlled timestamp; the repository itself always
/// records at NOW().
async fn seed_alert_at(
    pool: &PgPool,
    patient_id: DbId,
    device_id: DbId,
    message: &str,
    created_at: Timestamp,
) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO alerts (patient_id, device_id, alert_type, severity, message, created_at)
         VALUES ($1, $2, 'vital_signs', 'critical', $3, $4) RETURNING id",
    )
    .bind(patient_id)
    .bind(device_id)
    .bind(message)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

// ---------------------------------------------------------------------------
// Test: Insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_alert_defaults_unacknowledged(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, device_id, "Nguyễn Văn A", "BN-001").await;

    let alert = AlertRepo::create(&pool, &new_alert(patient_id, device_id, AlertLevel::Critical))
        .await
        .unwrap();

    assert!(alert.id > 0);
    assert_eq!(alert.alert_type, "vital_signs");
    assert_eq!(alert.severity, "critical");
    assert!(!alert.is_acknowledged);
    assert!(alert.acknowledged_by.is_none());
    assert!(alert.acknowledged_at.is_none());
    assert!(Utc::now().signed_duration_since(alert.created_at) < Duration::minutes(1));
}

// ---------------------------------------------------------------------------
// Test: Unacknowledged listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_unacknowledged_newest_first(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, device_id, "Nguyễn Văn A", "BN-001").await;

    let now = Utc::now();
    seed_alert_at(&pool, patient_id, device_id, "oldest", now - Duration::hours(3)).await;
    seed_alert_at(&pool, patient_id, device_id, "middle", now - Duration::hours(2)).await;
    seed_alert_at(&pool, patient_id, device_id, "newest", now - Duration::hours(1)).await;

    let alerts = AlertRepo::list_unacknowledged(&pool, 10).await.unwrap();
    assert_eq!(alerts.len(), 3);
    assert_eq!(alerts[0].message, "newest");
    assert_eq!(alerts[1].message, "middle");
    assert_eq!(alerts[2].message, "oldest");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_unacknowledged_respects_limit(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, device_id, "Nguyễn Văn A", "BN-001").await;

    let now = Utc::now();
    for i in 0..5 {
        let message = format!("alert {i}");
        seed_alert_at(
            &pool,
            patient_id,
            device_id,
            &message,
            now - Duration::minutes(i),
        )
        .await;
    }

    let alerts = AlertRepo::list_unacknowledged(&pool, 2).await.unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].message, "alert 0", "newest two survive the cap");
    assert_eq!(alerts[1].message, "alert 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_excludes_acknowledged(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, device_id, "Nguyễn Văn A", "BN-001").await;

    let now = Utc::now();
    let first = seed_alert_at(&pool, patient_id, device_id, "handled", now - Duration::hours(1)).await;
    seed_alert_at(&pool, patient_id, device_id, "open", now).await;

    AlertRepo::acknowledge(&pool, first, Some("Nurse Lan"))
        .await
        .unwrap()
        .expect("alert exists");

    let alerts = AlertRepo::list_unacknowledged(&pool, 10).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].message, "open");
}

// ---------------------------------------------------------------------------
// Test: Acknowledgement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acknowledge_records_actor_and_time(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, device_id, "Nguyễn Văn A", "BN-001").await;
    let created = AlertRepo::create(&pool, &new_alert(patient_id, device_id, AlertLevel::Critical))
        .await
        .unwrap();

    let acked = AlertRepo::acknowledge(&pool, created.id, Some("Nurse Lan"))
        .await
        .unwrap()
        .expect("alert exists");

    assert!(acked.is_acknowledged);
    assert_eq!(acked.acknowledged_by.as_deref(), Some("Nurse Lan"));
    let acknowledged_at = acked.acknowledged_at.expect("timestamp recorded");
    assert!(Utc::now().signed_duration_since(acknowledged_at) < Duration::minutes(1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acknowledge_without_actor(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, device_id, "Nguyễn Văn A", "BN-001").await;
    let created = AlertRepo::create(&pool, &new_alert(patient_id, device_id, AlertLevel::Warning))
        .await
        .unwrap();

    let acked = AlertRepo::acknowledge(&pool, created.id, None)
        .await
        .unwrap()
        .expect("alert exists");

    assert!(acked.is_acknowledged);
    assert!(acked.acknowledged_by.is_none());
    assert!(acked.acknowledged_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acknowledge_unknown_returns_none(pool: PgPool) {
    let result = AlertRepo::acknowledge(&pool, 999_999, Some("Nurse Lan"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acknowledge_twice_keeps_alert_acknowledged(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, device_id, "Nguyễn Văn A", "BN-001").await;
    let created = AlertRepo::create(&pool, &new_alert(patient_id, device_id, AlertLevel::Critical))
        .await
        .unwrap();

    AlertRepo::acknowledge(&pool, created.id, Some("Nurse Lan"))
        .await
        .unwrap()
        .expect("alert exists");
    let again = AlertRepo::acknowledge(&pool, created.id, Some("Dr. Minh"))
        .await
        .unwrap()
        .expect("repeat acknowledgement succeeds");

    assert!(again.is_acknowledged);
    assert_eq!(again.acknowledged_by.as_deref(), Some("Dr. Minh"));
}

// ---------------------------------------------------------------------------
// Test: Shared transaction with the reading insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reading_and_alert_rollback_together(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, device_id, "Nguyễn Văn A", "BN-001").await;

    let reading = CreateReading {
        patient_id,
        device_id,
        heart_rate: Some(35.0),
        oxygen_saturation: None,
        blood_pressure_systolic: None,
        blood_pressure_diastolic: None,
        respiratory_rate: None,
        body_temperature: None,
        room_temperature: None,
        humidity: None,
        ecg_value: None,
        ecg_leads_connected: false,
        ecg_status: "Normal".to_string(),
        ecg_data: None,
        fall_detected: false,
        fall_confidence: 0.0,
        gps_latitude: None,
        gps_longitude: None,
        gps_accuracy: None,
        room_detected: "Unknown".to_string(),
        location_confidence: 0.0,
        emergency_button_pressed: false,
        battery_level: Some(90.0),
        signal_strength: Some(-60),
        alert_level: "critical".to_string(),
        is_emergency: true,
    };

    let mut tx = pool.begin().await.unwrap();
    ReadingRepo::create(&mut *tx, &reading).await.unwrap();
    AlertRepo::create(
        &mut *tx,
        &new_alert(patient_id, device_id, AlertLevel::Critical),
    )
    .await
    .unwrap();
    tx.rollback().await.unwrap();

    let readings: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sensor_readings")
        .fetch_one(&pool)
        .await
        .unwrap();
    let alerts: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM alerts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(readings.0, 0, "rolled-back reading must not persist");
    assert_eq!(alerts.0, 0, "rolled-back alert must not persist");
}
