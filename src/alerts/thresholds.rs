use serde::Serialize;

use crate::models::enums::{Severity, VitalName};
use crate::models::TemperatureUnit;

pub const CRITICAL_COLOR: &str = "#DC2626";
pub const HIGH_COLOR: &str = "#EA580C";
pub const MODERATE_COLOR: &str = "#CA8A04";

/// Display colour for a severity tier.
pub const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => CRITICAL_COLOR,
        Severity::High => HIGH_COLOR,
        Severity::Moderate | Severity::Low => MODERATE_COLOR,
    }
}

/// Clinical metadata attached to one threshold tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdDefinition {
    pub id: &'static str,
    pub severity: Severity,
    pub alert: &'static str,
    pub action: &'static str,
    pub color: &'static str,
}

/// A reading as seen by the tier predicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Scalar(f64),
    Pressure { systolic: f64, diastolic: Option<f64> },
    Temperature { value: f64, unit: TemperatureUnit },
}

/// Numeric boundary of a tier. All comparisons are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    AtOrAbove { value: f64 },
    AtOrBelow { value: f64 },
    /// Systolic or diastolic at or above its bound.
    PressureAtOrAbove { systolic: f64, diastolic: f64 },
    /// Systolic at or below its bound. The diastolic figure is the
    /// published companion value and is not evaluated.
    SystolicAtOrBelow { systolic: f64, diastolic: f64 },
    TemperatureAtOrAbove { fahrenheit: f64, celsius: f64 },
    TemperatureAtOrBelow { fahrenheit: f64, celsius: f64 },
}

impl Trigger {
    pub fn matches(&self, reading: Reading) -> bool {
        match (*self, reading) {
            (Trigger::AtOrAbove { value }, Reading::Scalar(v)) => v >= value,
            (Trigger::AtOrBelow { value }, Reading::Scalar(v)) => v <= value,
            (
                Trigger::PressureAtOrAbove { systolic, diastolic },
                Reading::Pressure { systolic: s, diastolic: d },
            ) => s >= systolic || d.is_some_and(|d| d >= diastolic),
            (Trigger::SystolicAtOrBelow { systolic, .. }, Reading::Pressure { systolic: s, .. }) => {
                s <= systolic
            }
            (
                Trigger::TemperatureAtOrAbove { fahrenheit, celsius },
                Reading::Temperature { value, unit },
            ) => value >= Self::bound_for(unit, fahrenheit, celsius),
            (
                Trigger::TemperatureAtOrBelow { fahrenheit, celsius },
                Reading::Temperature { value, unit },
            ) => value <= Self::bound_for(unit, fahrenheit, celsius),
            _ => false,
        }
    }

    fn bound_for(unit: TemperatureUnit, fahrenheit: f64, celsius: f64) -> f64 {
        match unit {
            TemperatureUnit::Fahrenheit => fahrenheit,
            TemperatureUnit::Celsius => celsius,
        }
    }
}

/// One `(predicate, definition)` pair in a vital's precedence list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdTier {
    pub trigger: Trigger,
    pub definition: ThresholdDefinition,
}

impl ThresholdTier {
    pub fn matches(&self, reading: Reading) -> bool {
        self.trigger.matches(reading)
    }
}

/// Ordered tiers per vital. Within a list the first matching tier wins.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalThresholds {
    pub blood_pressure: &'static [ThresholdTier],
    pub spo2: &'static [ThresholdTier],
    pub pulse: &'static [ThresholdTier],
    pub temperature: &'static [ThresholdTier],
    pub respiratory_rate: &'static [ThresholdTier],
    pub blood_sugar: &'static [ThresholdTier],
}

impl CriticalThresholds {
    pub fn for_vital(&self, vital: VitalName) -> &'static [ThresholdTier] {
        match vital {
            VitalName::BloodPressure => self.blood_pressure,
            VitalName::Spo2 => self.spo2,
            VitalName::Pulse => self.pulse,
            VitalName::Temperature => self.temperature,
            VitalName::RespiratoryRate => self.respiratory_rate,
            VitalName::BloodSugar => self.blood_sugar,
        }
    }

    /// First tier in precedence order matching the reading.
    pub fn first_match(&self, vital: VitalName, reading: Reading) -> Option<&'static ThresholdTier> {
        self.for_vital(vital).iter().find(|tier| tier.matches(reading))
    }
}

const fn tier(
    trigger: Trigger,
    id: &'static str,
    severity: Severity,
    alert: &'static str,
    action: &'static str,
) -> ThresholdTier {
    ThresholdTier {
        trigger,
        definition: ThresholdDefinition {
            id,
            severity,
            alert,
            action,
            color: severity_color(severity),
        },
    }
}

// ---------------------------------------------------------------------------
// Tier tables (most severe first)
// ---------------------------------------------------------------------------

static BLOOD_PRESSURE_TIERS: [ThresholdTier; 4] = [
    tier(
        Trigger::PressureAtOrAbove { systolic: 180.0, diastolic: 120.0 },
        "hypertensive_crisis",
        Severity::Critical,
        "HYPERTENSIVE CRISIS",
        "Immediate medical attention required. Risk of stroke, heart attack, or organ damage.",
    ),
    tier(
        Trigger::PressureAtOrAbove { systolic: 160.0, diastolic: 100.0 },
        "severe_hypertension",
        Severity::High,
        "Severe Hypertension",
        "Urgent evaluation needed. Consider immediate treatment.",
    ),
    tier(
        Trigger::SystolicAtOrBelow { systolic: 80.0, diastolic: 50.0 },
        "severe_hypotension",
        Severity::Critical,
        "SEVERE HYPOTENSION",
        "Immediate intervention required. Risk of organ hypoperfusion.",
    ),
    tier(
        Trigger::SystolicAtOrBelow { systolic: 90.0, diastolic: 60.0 },
        "hypotension",
        Severity::High,
        "Hypotension",
        "Evaluate for shock, dehydration, or medication effects.",
    ),
];

static SPO2_TIERS: [ThresholdTier; 3] = [
    tier(
        Trigger::AtOrBelow { value: 88.0 },
        "severe_hypoxia",
        Severity::Critical,
        "SEVERE HYPOXIA",
        "Immediate oxygen supplementation required. Consider intubation.",
    ),
    tier(
        Trigger::AtOrBelow { value: 90.0 },
        "moderate_hypoxia",
        Severity::High,
        "Hypoxia",
        "Administer supplemental oxygen. Evaluate respiratory status.",
    ),
    tier(
        Trigger::AtOrBelow { value: 94.0 },
        "mild_hypoxia",
        Severity::Moderate,
        "Low Oxygen Saturation",
        "Monitor closely. Consider supplemental oxygen if symptomatic.",
    ),
];

static PULSE_TIERS: [ThresholdTier; 4] = [
    tier(
        Trigger::AtOrAbove { value: 150.0 },
        "severe_tachycardia",
        Severity::Critical,
        "SEVERE TACHYCARDIA",
        "Immediate evaluation. Consider ECG and cardiac monitoring.",
    ),
    tier(
        Trigger::AtOrAbove { value: 120.0 },
        "tachycardia",
        Severity::High,
        "Tachycardia",
        "Evaluate for underlying cause. Consider ECG.",
    ),
    tier(
        Trigger::AtOrBelow { value: 40.0 },
        "severe_bradycardia",
        Severity::Critical,
        "SEVERE BRADYCARDIA",
        "Immediate evaluation. Consider atropine or pacing.",
    ),
    tier(
        Trigger::AtOrBelow { value: 50.0 },
        "bradycardia",
        Severity::High,
        "Bradycardia",
        "Evaluate for medication effects or cardiac conduction issues.",
    ),
];

static TEMPERATURE_TIERS: [ThresholdTier; 4] = [
    tier(
        Trigger::TemperatureAtOrAbove { fahrenheit: 104.0, celsius: 40.0 },
        "hyperthermia",
        Severity::Critical,
        "HYPERTHERMIA",
        "Immediate cooling measures. Evaluate for heat stroke or infection.",
    ),
    tier(
        Trigger::TemperatureAtOrAbove { fahrenheit: 103.0, celsius: 39.4 },
        "high_fever",
        Severity::High,
        "High Fever",
        "Antipyretics and evaluation for infection source.",
    ),
    tier(
        Trigger::TemperatureAtOrAbove { fahrenheit: 100.4, celsius: 38.0 },
        "fever",
        Severity::Moderate,
        "Fever",
        "Monitor and evaluate for infection.",
    ),
    tier(
        Trigger::TemperatureAtOrBelow { fahrenheit: 95.0, celsius: 35.0 },
        "hypothermia",
        Severity::Critical,
        "HYPOTHERMIA",
        "Immediate warming measures. Evaluate for exposure or metabolic causes.",
    ),
];

static RESPIRATORY_RATE_TIERS: [ThresholdTier; 4] = [
    tier(
        Trigger::AtOrAbove { value: 30.0 },
        "severe_distress_high",
        Severity::Critical,
        "SEVERE RESPIRATORY DISTRESS",
        "Immediate respiratory support. Consider intubation.",
    ),
    tier(
        Trigger::AtOrBelow { value: 8.0 },
        "severe_distress_low",
        Severity::Critical,
        "RESPIRATORY DEPRESSION",
        "Immediate intervention. Consider naloxone if opioid-related.",
    ),
    tier(
        Trigger::AtOrAbove { value: 24.0 },
        "distress_high",
        Severity::High,
        "Tachypnea",
        "Evaluate respiratory status and oxygen needs.",
    ),
    tier(
        Trigger::AtOrBelow { value: 10.0 },
        "distress_low",
        Severity::High,
        "Bradypnea",
        "Monitor closely. Evaluate for CNS depression.",
    ),
];

static BLOOD_SUGAR_TIERS: [ThresholdTier; 4] = [
    tier(
        Trigger::AtOrAbove { value: 400.0 },
        "severe_hyperglycemia",
        Severity::Critical,
        "SEVERE HYPERGLYCEMIA",
        "Immediate insulin therapy. Evaluate for DKA or HHS.",
    ),
    tier(
        Trigger::AtOrAbove { value: 250.0 },
        "hyperglycemia",
        Severity::High,
        "Hyperglycemia",
        "Insulin adjustment needed. Check ketones.",
    ),
    tier(
        Trigger::AtOrBelow { value: 50.0 },
        "severe_hypoglycemia",
        Severity::Critical,
        "SEVERE HYPOGLYCEMIA",
        "Immediate glucose administration. Consider glucagon.",
    ),
    tier(
        Trigger::AtOrBelow { value: 70.0 },
        "hypoglycemia",
        Severity::High,
        "Hypoglycemia",
        "Administer glucose. Evaluate medication dosing.",
    ),
];

pub static CRITICAL_THRESHOLDS: CriticalThresholds = CriticalThresholds {
    blood_pressure: &BLOOD_PRESSURE_TIERS,
    spo2: &SPO2_TIERS,
    pulse: &PULSE_TIERS,
    temperature: &TEMPERATURE_TIERS,
    respiratory_rate: &RESPIRATORY_RATE_TIERS,
    blood_sugar: &BLOOD_SUGAR_TIERS,
};

/// Read-only view of the critical threshold tiers.
pub fn critical_thresholds() -> &'static CriticalThresholds {
    &CRITICAL_THRESHOLDS
}
