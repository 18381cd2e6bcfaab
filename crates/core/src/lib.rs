//! Domain logic for the vigil patient telemetry service.
//!
//! Everything in this crate is pure evaluation logic: no I/O, no database
//! access. The ingestion pipeline feeds sensor channel values in and gets an
//! alert classification back:
//!
//! - [`fall`]: classifies the raw fall-sensor signal.
//! - [`geofence`]: maps GPS coordinates to a named room.
//! - [`vitals`]: evaluates vital signs against threshold bands.
//! - [`aggregate`]: folds the per-channel results into one alert outcome.
//! - [`labels`]: operator-facing message templates (localizable).

pub mod aggregate;
pub mod alert;
pub mod error;
pub mod fall;
pub mod geofence;
pub mod labels;
pub mod types;
pub mod vitals;

pub use alert::{AlertLevel, AlertType};
pub use error::CoreError;
