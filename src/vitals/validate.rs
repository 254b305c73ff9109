use serde::{Deserialize, Serialize};

use crate::messages::MessageTemplates;
use crate::models::enums::AbnormalDirection;
use crate::models::{
    BloodPressureReading, BloodSugarReading, HeightReading, Measurement, TemperatureReading,
    VitalKind, VitalsBundle, WeightReading,
};

use super::convert::calculate_bmi;
use super::ranges::vital_ranges;

/// Outcome of validating one reading. Never an `Err`: invalid input is
/// reported through `is_valid = false` and `error`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub is_abnormal: bool,
    pub is_critical: bool,
    pub abnormal_direction: Option<AbnormalDirection>,
    pub error: Option<String>,
}

/// Validate a single vital value against its valid, normal and critical bounds.
///
/// Normal-range checks are strict (`<`, `>`); critical checks are inclusive
/// (`<=`, `>=`) and, when they fire, overwrite the direction with the
/// critical variant. `is_abnormal` and `is_critical` are independent.
pub fn validate_value(kind: VitalKind, value: f64) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !value.is_finite() {
        result.error = Some(MessageTemplates::invalid_value(kind.as_str()));
        return result;
    }

    let range = vital_ranges().for_kind(kind);

    if !range.is_valid(value) {
        result.error = Some(MessageTemplates::out_of_valid_range(
            kind.as_str(),
            value,
            range.valid_min,
            range.valid_max,
        ));
        return result;
    }

    result.is_valid = true;

    if value < range.normal_min {
        result.is_abnormal = true;
        result.abnormal_direction = Some(AbnormalDirection::Low);
    } else if value > range.normal_max {
        result.is_abnormal = true;
        result.abnormal_direction = Some(AbnormalDirection::High);
    }

    if range.critical_low.is_some_and(|low| value <= low) {
        result.is_critical = true;
        result.abnormal_direction = Some(AbnormalDirection::CriticalLow);
    } else if range.critical_high.is_some_and(|high| value >= high) {
        result.is_critical = true;
        result.abnormal_direction = Some(AbnormalDirection::CriticalHigh);
    }

    result
}

/// A reading echoed back with its abnormal flag attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flagged<T> {
    #[serde(flatten)]
    pub reading: T,
    pub is_abnormal: bool,
}

/// Per-field view of the readings that passed validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedVitals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<Flagged<BloodPressureReading>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse: Option<Flagged<Measurement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Flagged<TemperatureReading>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spo2: Option<Flagged<Measurement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_sugar: Option<Flagged<BloodSugarReading>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<Flagged<Measurement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<WeightReading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<HeightReading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    pub abnormal_flags: Vec<String>,
}

/// Aggregate validation over a whole bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub abnormal_flags: Vec<String>,
    pub critical_flags: Vec<String>,
    pub validated_vitals: ValidatedVitals,
}

impl Default for VitalsValidation {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            abnormal_flags: Vec::new(),
            critical_flags: Vec::new(),
            validated_vitals: ValidatedVitals::default(),
        }
    }
}

impl VitalsValidation {
    /// Validate one value, recording errors and flags. Returns the
    /// reading's abnormal flag when it passed validation.
    fn check(&mut self, kind: VitalKind, value: f64) -> Option<bool> {
        let result = validate_value(kind, value);

        if !result.is_valid {
            tracing::debug!(vital = kind.as_str(), value, "Rejected vital reading");
            self.is_valid = false;
            if let Some(error) = result.error {
                self.errors.push(error);
            }
            return None;
        }

        if let Some(direction) = result.abnormal_direction {
            let flag = MessageTemplates::vital_flag(kind.flag_label(), direction.as_str());
            if result.is_abnormal {
                self.abnormal_flags.push(flag.clone());
            }
            if result.is_critical {
                self.critical_flags.push(flag);
            }
        }

        Some(result.is_abnormal)
    }

    fn check_measurement(
        &mut self,
        kind: VitalKind,
        reading: Option<Measurement>,
    ) -> Option<Flagged<Measurement>> {
        let reading = reading?;
        let is_abnormal = self.check(kind, reading.value?)?;
        Some(Flagged { reading, is_abnormal })
    }
}

/// Validate every present field of a vitals bundle.
///
/// Absent fields are skipped. Weight and height are echoed unflagged, and
/// BMI is derived when both carry a non-zero value.
pub fn validate_vitals(vitals: &VitalsBundle) -> VitalsValidation {
    let mut out = VitalsValidation::default();

    if let Some(bp) = vitals.blood_pressure {
        let systolic = bp.systolic.and_then(|v| out.check(VitalKind::Systolic, v));
        let diastolic = bp.diastolic.and_then(|v| out.check(VitalKind::Diastolic, v));
        if systolic.is_some() || diastolic.is_some() {
            out.validated_vitals.blood_pressure = Some(Flagged {
                reading: bp,
                is_abnormal: systolic.unwrap_or(false) || diastolic.unwrap_or(false),
            });
        }
    }

    let pulse = out.check_measurement(VitalKind::Pulse, vitals.pulse);
    out.validated_vitals.pulse = pulse;

    if let Some(temp) = vitals.temperature {
        if let Some(value) = temp.value {
            if let Some(is_abnormal) = out.check(VitalKind::Temperature(temp.unit), value) {
                out.validated_vitals.temperature = Some(Flagged { reading: temp, is_abnormal });
            }
        }
    }

    let spo2 = out.check_measurement(VitalKind::Spo2, vitals.spo2);
    out.validated_vitals.spo2 = spo2;

    if let Some(sugar) = vitals.blood_sugar {
        if let Some(value) = sugar.value {
            if let Some(is_abnormal) = out.check(VitalKind::BloodSugar(sugar.context), value) {
                out.validated_vitals.blood_sugar = Some(Flagged { reading: sugar, is_abnormal });
            }
        }
    }

    let respiratory_rate = out.check_measurement(VitalKind::RespiratoryRate, vitals.respiratory_rate);
    out.validated_vitals.respiratory_rate = respiratory_rate;

    out.validated_vitals.weight = vitals.weight;
    out.validated_vitals.height = vitals.height;

    if let (Some(weight), Some(height)) = (vitals.weight, vitals.height) {
        if let (Some(w), Some(h)) = (weight.value, height.value) {
            if w != 0.0 && h != 0.0 {
                out.validated_vitals.bmi = calculate_bmi(w, weight.unit, h, height.unit);
            }
        }
    }

    out.validated_vitals.abnormal_flags = out.abnormal_flags.clone();
    out
}
