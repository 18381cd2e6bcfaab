//! Repository for the `patients` table. Read-only: patient records are
//! managed by the administrative surface, not by this service.

use sqlx::PgPool;
use vigil_core::types::DbId;

use crate::models::patient::Patient;

const PATIENT_COLUMNS: &str = "\
    id, name, age, gender, phone, email, medical_id, room_number, \
    bed_number, admission_date, diagnosis, device_id, is_active, created_at";

pub struct PatientRepo;

impl PatientRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = $1");
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Patient bound to the given device (internal id). One-to-one, so at
    /// most one row.
    pub async fn find_by_device(
        pool: &PgPool,
        device_id: DbId,
    ) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE device_id = $1");
        sqlx::query_as::<_, Patient>(&query)
            .bind(device_id)
            .fetch_optional(pool)
            .await
    }

    /// All active patients in admission order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Patient>, sqlx::Error> {
        let query =
            format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE is_active = TRUE ORDER BY id");
        sqlx::query_as::<_, Patient>(&query).fetch_all(pool).await
    }
}
