//! Entity models and insert DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus a create DTO where the core inserts rows.

pub mod alert;
pub mod device;
pub mod patient;
pub mod reading;

pub use alert::{Alert, CreateAlert};
pub use device::Device;
pub use patient::Patient;
pub use reading::{CreateReading, SensorReading};
