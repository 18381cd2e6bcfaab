//! Repository for the `devices` table.

use sqlx::PgPool;
use vigil_core::types::DbId;

use crate::models::device::Device;

const DEVICE_COLUMNS: &str = "\
    id, device_id, name, device_type, location, firmware_version, \
    ip_address, mac_address, battery_level, signal_strength, is_active, \
    last_seen, created_at";

/// Lookups and liveness updates for monitoring devices.
pub struct DeviceRepo;

impl DeviceRepo {
    /// Find a device by its external identifier (the `device_id` the
    /// firmware sends).
    pub async fn find_by_external_id(
        pool: &PgPool,
        device_id: &str,
    ) -> Result<Option<Device>, sqlx::Error> {
        let query = format!("SELECT {DEVICE_COLUMNS} FROM devices WHERE device_id = $1");
        sqlx::query_as::<_, Device>(&query)
            .bind(device_id)
            .fetch_optional(pool)
            .await
    }

    /// Record that the device was heard from: last-seen plus the battery
    /// and signal values it reported. Last-write-wins under concurrency.
    pub async fn touch_liveness(
        pool: &PgPool,
        id: DbId,
        battery_level: f64,
        signal_strength: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE devices SET last_seen = NOW(), battery_level = $2, signal_strength = $3 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(battery_level)
        .bind(signal_strength)
        .execute(pool)
        .await?;
        Ok(())
    }
}
