//! Alert severity and alert type classifications.

use serde::{Deserialize, Serialize};

/// Overall clinical severity of a reading.
///
/// The variant order gives the total order `Normal < Warning < Critical`
/// that the aggregation fold relies on: severity only ever moves up within
/// one evaluation pass.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl AlertLevel {
    /// Wire/database representation (`"normal"`, `"warning"`, `"critical"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Normal => "normal",
            AlertLevel::Warning => "warning",
            AlertLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a persisted alert by its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Threshold violation on one or more vital signs. Also covers
    /// emergency-button presses without a fall (see [`crate::aggregate`]).
    VitalSigns,
    /// The fall sensor reported a detection.
    FallDetection,
    /// Reserved: the aggregator currently records button presses as
    /// [`AlertType::VitalSigns`].
    EmergencyButton,
}

impl AlertType {
    /// Wire/database representation (`"vital_signs"`, `"fall_detection"`,
    /// `"emergency_button"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::VitalSigns => "vital_signs",
            AlertType::FallDetection => "fall_detection",
            AlertType::EmergencyButton => "emergency_button",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
