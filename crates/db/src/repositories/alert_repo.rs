//! Repository for persisted alerts and their acknowledgement state.

use sqlx::{PgExecutor, PgPool};
use vigil_core::types::DbId;

use crate::models::alert::{Alert, CreateAlert};

const ALERT_COLUMNS: &str = "\
    id, patient_id, device_id, alert_type, severity, message, \
    is_acknowledged, acknowledged_by, acknowledged_at, created_at";

pub struct AlertRepo;

impl AlertRepo {
    /// Insert a new alert.
    ///
    /// Generic over the executor so the ingestion pipeline can run it inside
    /// the same transaction as the reading insert.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        alert: &CreateAlert,
    ) -> Result<Alert, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (patient_id, device_id, alert_type, severity, message) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ALERT_COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(alert.patient_id)
            .bind(alert.device_id)
            .bind(alert.alert_type.as_str())
            .bind(alert.severity.as_str())
            .bind(&alert.message)
            .fetch_one(executor)
            .await
    }

    /// Unacknowledged alerts, newest first, capped at `limit`.
    pub async fn list_unacknowledged(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!(
            "SELECT {ALERT_COLUMNS} FROM alerts \
             WHERE NOT is_acknowledged \
             ORDER BY created_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Mark an alert acknowledged. Returns `None` when the id is unknown.
    ///
    /// There is no once-only guard: re-acknowledging refreshes
    /// `acknowledged_by` and `acknowledged_at`.
    pub async fn acknowledge(
        pool: &PgPool,
        id: DbId,
        acknowledged_by: Option<&str>,
    ) -> Result<Option<Alert>, sqlx::Error> {
        let query = format!(
            "UPDATE alerts \
             SET is_acknowledged = TRUE, acknowledged_by = $2, acknowledged_at = NOW() \
             WHERE id = $1 \
             RETURNING {ALERT_COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(id)
            .bind(acknowledged_by)
            .fetch_optional(pool)
            .await
    }
}
