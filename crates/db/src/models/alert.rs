use serde::Serialize;
use sqlx::FromRow;
use vigil_core::alert::{AlertLevel, AlertType};
use vigil_core::types::{DbId, Timestamp};

/// A persisted alert, created when a reading's derived level is not normal.
/// Mutated only by the acknowledgement action.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Alert {
    pub id: DbId,
    pub patient_id: DbId,
    pub device_id: DbId,
    pub alert_type: String,
    pub severity: String,
    pub message: String,
    pub is_acknowledged: bool,
    /// Who acknowledged; free-form since operator accounts live outside
    /// this service.
    pub acknowledged_by: Option<String>,
    pub acknowledged_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Column values for inserting one alert.
#[derive(Debug, Clone)]
pub struct CreateAlert {
    pub patient_id: DbId,
    pub device_id: DbId,
    pub alert_type: AlertType,
    pub severity: AlertLevel,
    pub message: String,
}
