//! Operator-facing alert message templates.
//!
//! Every human-readable fragment flows through [`MessageLabels`] so a
//! deployment can localize alert text without touching evaluation logic.
//! The defaults are the Vietnamese strings used by the ward installation
//! this service was built for.

/// Placeholder replaced with the measured value when a fragment is rendered.
pub const VALUE_SLOT: &str = "{value}";

/// Placeholder replaced with the patient name in the alert header.
pub const NAME_SLOT: &str = "{name}";

/// Message templates for alert fragments and the composed alert header.
///
/// Templates for measured parameters contain [`VALUE_SLOT`]; the header
/// contains [`NAME_SLOT`]. Fixed fragments carry no placeholder.
#[derive(Debug, Clone)]
pub struct MessageLabels {
    pub heart_rate: String,
    pub body_temperature: String,
    pub oxygen_saturation: String,
    pub room_temperature: String,
    pub humidity: String,
    pub ecg_leads_disconnected: String,
    pub fall_detected: String,
    pub emergency_button: String,
    pub header: String,
}

impl Default for MessageLabels {
    fn default() -> Self {
        Self {
            heart_rate: "Nhịp tim: {value} bpm".to_string(),
            body_temperature: "Nhiệt độ cơ thể: {value}°C".to_string(),
            oxygen_saturation: "Độ bão hòa oxy: {value}%".to_string(),
            room_temperature: "Nhiệt độ phòng: {value}°C".to_string(),
            humidity: "Độ ẩm phòng: {value}%".to_string(),
            ecg_leads_disconnected: "Điện cực ECG bị ngắt kết nối".to_string(),
            fall_detected: "Phát hiện té ngã (độ tin cậy: {value}%)".to_string(),
            emergency_button: "Nút cảnh báo khẩn cấp được nhấn".to_string(),
            header: "Bệnh nhân {name} cảnh báo: ".to_string(),
        }
    }
}

impl MessageLabels {
    pub fn heart_rate_fragment(&self, bpm: f64) -> String {
        fill(&self.heart_rate, bpm)
    }

    pub fn body_temperature_fragment(&self, celsius: f64) -> String {
        fill(&self.body_temperature, celsius)
    }

    pub fn oxygen_saturation_fragment(&self, percent: f64) -> String {
        fill(&self.oxygen_saturation, percent)
    }

    pub fn room_temperature_fragment(&self, celsius: f64) -> String {
        fill(&self.room_temperature, celsius)
    }

    pub fn humidity_fragment(&self, percent: f64) -> String {
        fill(&self.humidity, percent)
    }

    pub fn ecg_leads_fragment(&self) -> String {
        self.ecg_leads_disconnected.clone()
    }

    /// Fall fragment with the confidence rendered as a percentage with one
    /// decimal place (`0.9` becomes `90.0`).
    pub fn fall_fragment(&self, confidence: f64) -> String {
        self.fall_detected
            .replace(VALUE_SLOT, &format!("{:.1}", confidence * 100.0))
    }

    pub fn emergency_button_fragment(&self) -> String {
        self.emergency_button.clone()
    }

    /// Header prefix for a composed alert message.
    pub fn alert_header(&self, patient_name: &str) -> String {
        self.header.replace(NAME_SLOT, patient_name)
    }
}

fn fill(template: &str, value: f64) -> String {
    template.replace(VALUE_SLOT, &value.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
