use serde::Serialize;
use sqlx::FromRow;
use vigil_core::types::{DbId, Timestamp};

/// A bedside monitoring unit.
///
/// `device_id` is the external identifier the firmware embeds in every
/// payload; `id` is the internal key other tables reference.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Device {
    pub id: DbId,
    pub device_id: String,
    pub name: String,
    pub device_type: String,
    pub location: Option<String>,
    pub firmware_version: Option<String>,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub battery_level: f64,
    pub signal_strength: Option<i32>,
    pub is_active: bool,
    pub last_seen: Option<Timestamp>,
    pub created_at: Timestamp,
}
