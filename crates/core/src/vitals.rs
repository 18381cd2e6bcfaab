//! Vital-sign threshold evaluation.
//!
//! Pure logic, no database access. The pipeline collects whatever channel
//! values arrived in the payload and passes them in; each parameter is
//! checked independently against a warning band and (for the clinical
//! vitals) a wider critical band. Absent channels contribute nothing.

use crate::alert::AlertLevel;
use crate::labels::MessageLabels;

/// One patient's channel values for a single evaluation pass.
#[derive(Debug, Clone, Default)]
pub struct VitalSnapshot {
    pub heart_rate: Option<f64>,
    pub body_temperature: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub room_temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ecg_value: Option<f64>,
    pub ecg_leads_connected: bool,
}

/// Inclusive normal range; a value outside either present bound violates
/// the band. A `None` bound means that side is unbounded (one-sided rules
/// like SpO2).
#[derive(Debug, Clone, Copy)]
pub struct ThresholdBand {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ThresholdBand {
    /// Band violated below `low` or above `high`.
    pub const fn between(low: f64, high: f64) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    /// One-sided band violated only below `low`.
    pub const fn at_least(low: f64) -> Self {
        Self {
            low: Some(low),
            high: None,
        }
    }

    pub fn violated_by(&self, value: f64) -> bool {
        self.low.is_some_and(|low| value < low) || self.high.is_some_and(|high| value > high)
    }
}

/// Warning band plus optional critical band for one parameter.
///
/// The critical band, when present, is expected to be wider than the
/// warning band so a critical violation always implies a warning violation.
#[derive(Debug, Clone, Copy)]
pub struct VitalRule {
    pub warning: ThresholdBand,
    pub critical: Option<ThresholdBand>,
}

/// Threshold configuration for every evaluated parameter.
#[derive(Debug, Clone)]
pub struct VitalThresholds {
    pub heart_rate: VitalRule,
    pub body_temperature: VitalRule,
    pub oxygen_saturation: VitalRule,
    pub room_temperature: VitalRule,
    pub humidity: VitalRule,
}

impl Default for VitalThresholds {
    /// Clinical defaults: heart rate 60-100 bpm (critical outside 40-120),
    /// body temperature 36-38 C (critical outside 35-39), SpO2 at least
    /// 95% (critical below 90%). Room temperature 18-30 C and humidity
    /// 30-70% are comfort checks and never escalate past warning.
    fn default() -> Self {
        Self {
            heart_rate: VitalRule {
                warning: ThresholdBand::between(60.0, 100.0),
                critical: Some(ThresholdBand::between(40.0, 120.0)),
            },
            body_temperature: VitalRule {
                warning: ThresholdBand::between(36.0, 38.0),
                critical: Some(ThresholdBand::between(35.0, 39.0)),
            },
            oxygen_saturation: VitalRule {
                warning: ThresholdBand::at_least(95.0),
                critical: Some(ThresholdBand::at_least(90.0)),
            },
            room_temperature: VitalRule {
                warning: ThresholdBand::between(18.0, 30.0),
                critical: None,
            },
            humidity: VitalRule {
                warning: ThresholdBand::between(30.0, 70.0),
                critical: None,
            },
        }
    }
}

/// Result of one evaluation pass: accumulated worst severity plus the
/// message fragments for every violated warning band, in evaluation order.
#[derive(Debug, Clone, Default)]
pub struct VitalAssessment {
    pub severity: AlertLevel,
    pub fragments: Vec<String>,
}

/// Evaluate all present channels against the thresholds.
///
/// Evaluation order is fixed: heart rate, body temperature, oxygen
/// saturation, room temperature, humidity, ECG leads. Severity accumulates
/// monotonically; a later warning never downgrades an earlier critical.
pub fn evaluate(
    snapshot: &VitalSnapshot,
    thresholds: &VitalThresholds,
    labels: &MessageLabels,
) -> VitalAssessment {
    let mut severity = AlertLevel::Normal;
    let mut fragments = Vec::new();

    if let Some(bpm) = snapshot.heart_rate {
        apply_rule(
            bpm,
            &thresholds.heart_rate,
            || labels.heart_rate_fragment(bpm),
            &mut severity,
            &mut fragments,
        );
    }

    if let Some(celsius) = snapshot.body_temperature {
        apply_rule(
            celsius,
            &thresholds.body_temperature,
            || labels.body_temperature_fragment(celsius),
            &mut severity,
            &mut fragments,
        );
    }

    if let Some(percent) = snapshot.oxygen_saturation {
        apply_rule(
            percent,
            &thresholds.oxygen_saturation,
            || labels.oxygen_saturation_fragment(percent),
            &mut severity,
            &mut fragments,
        );
    }

    if let Some(celsius) = snapshot.room_temperature {
        apply_rule(
            celsius,
            &thresholds.room_temperature,
            || labels.room_temperature_fragment(celsius),
            &mut severity,
            &mut fragments,
        );
    }

    if let Some(percent) = snapshot.humidity {
        apply_rule(
            percent,
            &thresholds.humidity,
            || labels.humidity_fragment(percent),
            &mut severity,
            &mut fragments,
        );
    }

    // Leads reported connected without any ECG value means the electrodes
    // came loose. Warning only; never escalates.
    if snapshot.ecg_leads_connected && snapshot.ecg_value.is_none() {
        if AlertLevel::Warning > severity {
            severity = AlertLevel::Warning;
        }
        fragments.push(labels.ecg_leads_fragment());
    }

    VitalAssessment {
        severity,
        fragments,
    }
}

/// Check one value against one rule, pushing a fragment on a warning-band
/// violation and upgrading the accumulated severity.
fn apply_rule(
    value: f64,
    rule: &VitalRule,
    fragment: impl FnOnce() -> String,
    severity: &mut AlertLevel,
    fragments: &mut Vec<String>,
) {
    let warning_hit = rule.warning.violated_by(value);
    let critical_hit = rule.critical.is_some_and(|band| band.violated_by(value));

    if warning_hit {
        fragments.push(fragment());
    }

    let contribution = if critical_hit {
        AlertLevel::Critical
    } else if warning_hit {
        AlertLevel::Warning
    } else {
        return;
    };

    if contribution > *severity {
        *severity = contribution;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
