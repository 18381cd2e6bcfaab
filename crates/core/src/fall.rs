//! Fall-sensor signal interpretation.
//!
//! The bedside unit's fall sensor is a binary digital output, but firmware
//! revisions have shipped it as a bool, a 0/1 integer, and occasionally as a
//! string. The interpreter accepts whatever JSON arrived and never fails:
//! malformed input degrades to "no fall".

use serde_json::Value;

/// Confidence reported for a positive fall signal. The sensor is binary, so
/// a fixed confidence stands in for a probability.
const FALL_CONFIDENCE: f64 = 0.9;

/// Result of interpreting the raw fall-sensor field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FallReading {
    pub detected: bool,
    pub confidence: f64,
}

impl FallReading {
    /// The no-detection result (`detected=false`, `confidence=0.0`).
    pub const fn none() -> Self {
        Self {
            detected: false,
            confidence: 0.0,
        }
    }
}

/// Classify the raw fall-sensor value.
///
/// Any truthy JSON value counts as a detection with confidence 0.9; falsy,
/// missing, or malformed input yields [`FallReading::none`].
pub fn interpret(raw: Option<&Value>) -> FallReading {
    match raw {
        Some(value) if is_truthy(value) => FallReading {
            detected: true,
            confidence: FALL_CONFIDENCE,
        },
        _ => FallReading::none(),
    }
}

/// Truthiness over JSON: `null`, `false`, `0`, `""`, `[]`, and `{}` are
/// falsy; everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
