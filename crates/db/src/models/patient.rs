use serde::Serialize;
use sqlx::FromRow;
use vigil_core::types::{DbId, Timestamp};

/// A monitored patient. At most one device is bound per patient
/// (`uq_patients_device_id`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Patient {
    pub id: DbId,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub medical_id: String,
    pub room_number: Option<String>,
    pub bed_number: Option<String>,
    pub admission_date: Option<Timestamp>,
    pub diagnosis: Option<String>,
    /// Internal id of the bound device, if any.
    pub device_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl Patient {
    /// Presentation status derived from the active flag.
    pub fn status(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}
