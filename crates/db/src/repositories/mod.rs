//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! the pool (or, where the pipeline needs transactional inserts, any
//! `PgExecutor`) as the first argument.

pub mod alert_repo;
pub mod device_repo;
pub mod patient_repo;
pub mod reading_repo;

pub use alert_repo::AlertRepo;
pub use device_repo::DeviceRepo;
pub use patient_repo::PatientRepo;
pub use reading_repo::ReadingRepo;
