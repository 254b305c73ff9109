use serde::{Deserialize, Deserializer, Serialize};

/// Temperature scale selecting the Fahrenheit or Celsius sub-table.
/// Anything other than `C`/`°C` reads as Fahrenheit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Option<String>")]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "C")]
    Celsius,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Celsius => "C",
        }
    }
}

impl From<Option<String>> for TemperatureUnit {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some("C" | "°C") => TemperatureUnit::Celsius,
            _ => TemperatureUnit::Fahrenheit,
        }
    }
}

/// Timing of a blood-sugar draw relative to meals. Unrecognised values
/// read as `random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", from = "Option<String>")]
pub enum GlucoseContext {
    Fasting,
    #[default]
    Random,
    PostMeal,
}

impl From<Option<String>> for GlucoseContext {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some("fasting") => GlucoseContext::Fasting,
            Some("postMeal") => GlucoseContext::PostMeal,
            _ => GlucoseContext::Random,
        }
    }
}

/// Weight unit. Anything other than pounds reads as kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Option<String>")]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lbs")]
    Pounds,
}

impl From<Option<String>> for WeightUnit {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some("lbs" | "lb") => WeightUnit::Pounds,
            _ => WeightUnit::Kilograms,
        }
    }
}

/// Height unit. Imperial heights are carried as total inches; anything
/// else reads as centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Option<String>")]
pub enum HeightUnit {
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "in")]
    Inches,
}

impl From<Option<String>> for HeightUnit {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some("in" | "ft") => HeightUnit::Inches,
            _ => HeightUnit::Centimeters,
        }
    }
}

/// Reading values arrive from forms: numbers, numeric strings, or junk.
/// Absent and `null` stay `None`; anything unparseable becomes `NaN` so the
/// validator reports it per field instead of the whole bundle failing.
fn lenient_reading<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::Number(n)) => Some(n.as_f64().unwrap_or(f64::NAN)),
        Some(serde_json::Value::String(s)) => Some(s.trim().parse().unwrap_or(f64::NAN)),
        Some(_) => Some(f64::NAN),
    })
}

/// A vital that may be validated on its own, with the sub-table selector
/// folded into the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalKind {
    Systolic,
    Diastolic,
    Pulse,
    Temperature(TemperatureUnit),
    Spo2,
    RespiratoryRate,
    BloodSugar(GlucoseContext),
}

impl VitalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalKind::Systolic => "systolic",
            VitalKind::Diastolic => "diastolic",
            VitalKind::Pulse => "pulse",
            VitalKind::Temperature(_) => "temperature",
            VitalKind::Spo2 => "spo2",
            VitalKind::RespiratoryRate => "respiratoryRate",
            VitalKind::BloodSugar(_) => "bloodSugar",
        }
    }

    /// Label used in human-readable abnormal/critical flags.
    pub fn flag_label(self) -> &'static str {
        match self {
            VitalKind::Systolic => "BP Systolic",
            VitalKind::Diastolic => "BP Diastolic",
            VitalKind::Pulse => "Pulse",
            VitalKind::Temperature(_) => "Temperature",
            VitalKind::Spo2 => "SpO2",
            VitalKind::RespiratoryRate => "Respiratory Rate",
            VitalKind::BloodSugar(_) => "Blood Sugar",
        }
    }
}

// ---------------------------------------------------------------------------
// Input bundle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BloodPressureReading {
    #[serde(default, deserialize_with = "lenient_reading")]
    pub systolic: Option<f64>,
    #[serde(default, deserialize_with = "lenient_reading")]
    pub diastolic: Option<f64>,
}

/// A single-valued reading (pulse, SpO2, respiratory rate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default, deserialize_with = "lenient_reading")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    #[serde(default, deserialize_with = "lenient_reading")]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: TemperatureUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodSugarReading {
    #[serde(default, deserialize_with = "lenient_reading")]
    pub value: Option<f64>,
    #[serde(default, rename = "type")]
    pub context: GlucoseContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightReading {
    #[serde(default, deserialize_with = "lenient_reading")]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: WeightUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightReading {
    #[serde(default, deserialize_with = "lenient_reading")]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: HeightUnit,
}

/// One visit's worth of vitals. Any subset may be present; absent fields
/// are skipped, never defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsBundle {
    pub blood_pressure: Option<BloodPressureReading>,
    pub pulse: Option<Measurement>,
    pub temperature: Option<TemperatureReading>,
    pub spo2: Option<Measurement>,
    pub respiratory_rate: Option<Measurement>,
    pub blood_sugar: Option<BloodSugarReading>,
    pub weight: Option<WeightReading>,
    pub height: Option<HeightReading>,
}

impl VitalsBundle {
    pub fn pulse(&self) -> Option<f64> {
        self.pulse.and_then(|m| m.value)
    }

    pub fn spo2(&self) -> Option<f64> {
        self.spo2.and_then(|m| m.value)
    }

    pub fn respiratory_rate(&self) -> Option<f64> {
        self.respiratory_rate.and_then(|m| m.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_deserializes_partial_json() {
        let json = r#"{
            "bloodPressure": { "systolic": 200, "diastolic": 130 },
            "temperature": { "value": 41, "unit": "°C" },
            "bloodSugar": { "value": 95, "type": "fasting" },
            "weight": { "value": 154, "unit": "lbs" }
        }"#;
        let bundle: VitalsBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.blood_pressure.unwrap().systolic, Some(200.0));
        assert_eq!(bundle.temperature.unwrap().unit, TemperatureUnit::Celsius);
        assert_eq!(bundle.blood_sugar.unwrap().context, GlucoseContext::Fasting);
        assert_eq!(bundle.weight.unwrap().unit, WeightUnit::Pounds);
        assert!(bundle.pulse.is_none());
        assert!(bundle.height.is_none());
    }

    #[test]
    fn units_default_when_omitted() {
        let temp: TemperatureReading = serde_json::from_str(r#"{ "value": 98.6 }"#).unwrap();
        assert_eq!(temp.unit, TemperatureUnit::Fahrenheit);
        let sugar: BloodSugarReading = serde_json::from_str(r#"{ "value": 120 }"#).unwrap();
        assert_eq!(sugar.context, GlucoseContext::Random);
        let height: HeightReading = serde_json::from_str(r#"{ "value": 68, "unit": "ft" }"#).unwrap();
        assert_eq!(height.unit, HeightUnit::Inches);
    }

    #[test]
    fn unrecognised_units_fall_back() {
        let temp: TemperatureReading =
            serde_json::from_str(r#"{ "value": 37, "unit": "celsius" }"#).unwrap();
        assert_eq!(temp.unit, TemperatureUnit::Fahrenheit);
        let sugar: BloodSugarReading =
            serde_json::from_str(r#"{ "value": 120, "type": "bedtime" }"#).unwrap();
        assert_eq!(sugar.context, GlucoseContext::Random);
        let weight: WeightReading =
            serde_json::from_str(r#"{ "value": 70, "unit": null }"#).unwrap();
        assert_eq!(weight.unit, WeightUnit::Kilograms);
    }

    #[test]
    fn reading_values_parse_leniently() {
        let json = r#"{
            "bloodPressure": { "systolic": "140", "diastolic": null },
            "pulse": { "value": "abc" },
            "spo2": { "value": 97 },
            "respiratoryRate": { "value": true }
        }"#;
        let bundle: VitalsBundle = serde_json::from_str(json).unwrap();
        let bp = bundle.blood_pressure.unwrap();
        assert_eq!(bp.systolic, Some(140.0));
        assert_eq!(bp.diastolic, None);
        assert!(bundle.pulse().unwrap().is_nan());
        assert_eq!(bundle.spo2(), Some(97.0));
        assert!(bundle.respiratory_rate().unwrap().is_nan());
    }

    #[test]
    fn units_serialize_canonically() {
        let temp = TemperatureReading { value: Some(38.0), unit: TemperatureUnit::Celsius };
        assert_eq!(serde_json::to_string(&temp).unwrap(), r#"{"value":38.0,"unit":"C"}"#);
        let height = HeightReading { value: Some(68.0), unit: HeightUnit::Inches };
        assert_eq!(serde_json::to_string(&height).unwrap(), r#"{"value":68.0,"unit":"in"}"#);
    }

    #[test]
    fn vital_kind_labels() {
        assert_eq!(VitalKind::Temperature(TemperatureUnit::Celsius).as_str(), "temperature");
        assert_eq!(VitalKind::BloodSugar(GlucoseContext::PostMeal).flag_label(), "Blood Sugar");
    }
}
