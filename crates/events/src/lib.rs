//! Event fan-out between the ingestion pipeline and live observers.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`SensorUpdate`]: the broadcast payload, naming the patient a reading
//!   belongs to plus its wire snapshot.
//! - [`ReadingSnapshot`]: curated projection of a stored reading, shared by
//!   the broadcast and the read-path responses.

pub mod bus;
pub mod snapshot;

pub use bus::{EventBus, SensorUpdate};
pub use snapshot::ReadingSnapshot;
