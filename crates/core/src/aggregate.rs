//! Alert aggregation: folds per-channel results into one outcome.
//!
//! The fold order is fixed: vital-sign severity first, then fall detection,
//! then the emergency button. Fall and button both force a critical
//! emergency regardless of vitals.

use crate::alert::{AlertLevel, AlertType};
use crate::fall::FallReading;
use crate::labels::MessageLabels;
use crate::vitals::VitalAssessment;

/// Combined alert outcome for one reading.
#[derive(Debug, Clone)]
pub struct AlertOutcome {
    pub level: AlertLevel,
    pub is_emergency: bool,
    /// All message fragments in evaluation order; empty when nothing fired.
    pub fragments: Vec<String>,
    /// Alert classification for persistence; `None` while the level is
    /// normal (no alert row is created).
    pub alert_type: Option<AlertType>,
}

/// Fold vitals, fall detection, and the emergency button into one outcome.
///
/// A critical vital implies the emergency flag. A detected fall or a button
/// press forces `critical`/emergency and appends its fragment. Button-only
/// alerts are classified [`AlertType::VitalSigns`]; only a detected fall
/// switches the classification to [`AlertType::FallDetection`].
pub fn aggregate(
    vitals: VitalAssessment,
    fall: FallReading,
    emergency_button_pressed: bool,
    labels: &MessageLabels,
) -> AlertOutcome {
    let mut level = vitals.severity;
    let mut is_emergency = vitals.severity == AlertLevel::Critical;
    let mut fragments = vitals.fragments;

    if fall.detected {
        level = AlertLevel::Critical;
        is_emergency = true;
        fragments.push(labels.fall_fragment(fall.confidence));
    }

    if emergency_button_pressed {
        level = AlertLevel::Critical;
        is_emergency = true;
        fragments.push(labels.emergency_button_fragment());
    }

    let alert_type = if level == AlertLevel::Normal {
        None
    } else if fall.detected {
        Some(AlertType::FallDetection)
    } else {
        Some(AlertType::VitalSigns)
    };

    AlertOutcome {
        level,
        is_emergency,
        fragments,
        alert_type,
    }
}

/// Compose the operator-facing alert message from the collected fragments.
///
/// Only called for non-normal outcomes; the header names the patient and
/// the fragments are joined with `"; "`.
pub fn compose_message(
    patient_name: &str,
    fragments: &[String],
    labels: &MessageLabels,
) -> String {
    format!("{}{}", labels.alert_header(patient_name), fragments.join("; "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
