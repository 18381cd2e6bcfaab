//! HTTP request handlers, grouped by resource.

pub mod alerts;
pub mod status;
pub mod telemetry;
