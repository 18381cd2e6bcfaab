//! Integration tests for patient status and reading history endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_bytes, body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

async fn seed_device(pool: &PgPool, external_id: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO devices (device_id, name) VALUES ($1, $2) RETURNING id")
        .bind(external_id)
        .bind("Bedside unit")
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn seed_patient(pool: &PgPool, name: &str, medical_id: &str, device_id: Option<i64>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO patients (name, medical_id, device_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(medical_id)
    .bind(device_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn seed_reading_at(
    pool: &PgPool,
    patient_id: i64,
    device_id: i64,
    recorded_at: chrono::DateTime<Utc>,
    heart_rate: f64,
) {
    sqlx::query(
        "INSERT INTO sensor_readings (patient_id, device_id, recorded_at, heart_rate) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(patient_id)
    .bind(device_id)
    .bind(recorded_at)
    .bind(heart_rate)
    .execute(pool)
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Test: device status reports the bound patient and newest reading
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn device_status_reports_patient_and_latest_reading(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, "Nguyễn Văn A", "MED-001", Some(device_id)).await;

    let now = Utc::now();
    seed_reading_at(&pool, patient_id, device_id, now - Duration::hours(1), 70.0).await;
    seed_reading_at(&pool, patient_id, device_id, now, 90.0).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/devices/ESP32_001/status").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["patient_id"], patient_id);
    assert_eq!(data["name"], "Nguyễn Văn A");
    assert_eq!(data["status"], "active");
    assert_eq!(data["latest_reading"]["heart_rate"], 90.0);
}

// ---------------------------------------------------------------------------
// Test: device status with no readings yet carries a null snapshot
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn device_status_without_readings_has_null_snapshot(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    seed_patient(&pool, "Nguyễn Văn A", "MED-001", Some(device_id)).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/devices/ESP32_001/status").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["latest_reading"].is_null());
}

// ---------------------------------------------------------------------------
// Test: unknown device and unassigned device both yield 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn device_status_unknown_device_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/devices/GHOST_99/status").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn device_status_unassigned_device_is_404(pool: PgPool) {
    seed_device(&pool, "ESP32_001").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/devices/ESP32_001/status").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: patients overview lists active patients only
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn patients_status_lists_active_patients_with_snapshots(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let monitored = seed_patient(&pool, "Nguyễn Văn A", "MED-001", Some(device_id)).await;
    seed_patient(&pool, "Trần Thị B", "MED-002", None).await;

    let discharged = seed_patient(&pool, "Lê Văn C", "MED-003", None).await;
    sqlx::query("UPDATE patients SET is_active = FALSE WHERE id = $1")
        .bind(discharged)
        .execute(&pool)
        .await
        .unwrap();

    seed_reading_at(&pool, monitored, device_id, Utc::now(), 82.0).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/patients/status").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);

    // list order is by id, so the monitored patient comes first.
    assert_eq!(data[0]["id"], monitored);
    assert_eq!(data[0]["name"], "Nguyễn Văn A");
    assert_eq!(data[0]["status"], "active");
    assert_eq!(data[0]["latest_reading"]["heart_rate"], 82.0);

    assert_eq!(data[1]["name"], "Trần Thị B");
    assert!(data[1]["latest_reading"].is_null());
}

// ---------------------------------------------------------------------------
// Test: reading history honors the default window, newest first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn readings_return_default_window_newest_first(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, "Nguyễn Văn A", "MED-001", Some(device_id)).await;

    let now = Utc::now();
    seed_reading_at(&pool, patient_id, device_id, now - Duration::hours(30), 60.0).await;
    seed_reading_at(&pool, patient_id, device_id, now - Duration::hours(2), 70.0).await;
    seed_reading_at(&pool, patient_id, device_id, now - Duration::minutes(10), 80.0).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/patients/{patient_id}/readings")).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["heart_rate"], 80.0);
    assert_eq!(data[1]["heart_rate"], 70.0);
}

// ---------------------------------------------------------------------------
// Test: the hours parameter widens the window
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn readings_hours_param_widens_window(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, "Nguyễn Văn A", "MED-001", Some(device_id)).await;

    let now = Utc::now();
    seed_reading_at(&pool, patient_id, device_id, now - Duration::hours(30), 60.0).await;
    seed_reading_at(&pool, patient_id, device_id, now - Duration::hours(2), 70.0).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/patients/{patient_id}/readings?hours=48"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: out-of-range hours values are rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn readings_hours_out_of_range_is_rejected(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, "Nguyễn Văn A", "MED-001", Some(device_id)).await;

    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        &format!("/api/v1/patients/{patient_id}/readings?hours=0"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/patients/{patient_id}/readings?hours=169"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: history for an unknown patient is 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn readings_unknown_patient_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/patients/999999/readings").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: read endpoints are repeatable, byte for byte
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_reads_return_identical_bodies(pool: PgPool) {
    let device_id = seed_device(&pool, "ESP32_001").await;
    let patient_id = seed_patient(&pool, "Nguyễn Văn A", "MED-001", Some(device_id)).await;

    let now = Utc::now();
    seed_reading_at(&pool, patient_id, device_id, now - Duration::hours(1), 70.0).await;
    seed_reading_at(&pool, patient_id, device_id, now - Duration::minutes(5), 90.0).await;

    let readings_uri = format!("/api/v1/patients/{patient_id}/readings");
    let response = get(common::build_test_app(pool.clone()), &readings_uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_bytes(response).await;

    let response = get(common::build_test_app(pool.clone()), &readings_uri).await;
    let second = body_bytes(response).await;
    assert_eq!(first, second, "history read must not change what it reads");

    let status_uri = "/api/v1/devices/ESP32_001/status";
    let response = get(common::build_test_app(pool.clone()), status_uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_bytes(response).await;

    let response = get(common::build_test_app(pool), status_uri).await;
    let second = body_bytes(response).await;
    assert_eq!(first, second, "status read must not change what it reads");
}
