use serde::Serialize;

use crate::models::{GlucoseContext, TemperatureUnit, VitalKind};

/// Input and reference bounds for one vital in a fixed unit.
///
/// Ordering invariant, where bounds are present:
/// `valid_min <= critical_low <= normal_min <= normal_max <= critical_high <= valid_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalRange {
    pub valid_min: f64,
    pub valid_max: f64,
    pub normal_min: f64,
    pub normal_max: f64,
    pub critical_low: Option<f64>,
    pub critical_high: Option<f64>,
    /// Fasting glucose only: upper bound of the pre-diabetic band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_diabetic_max: Option<f64>,
}

impl VitalRange {
    pub fn is_valid(&self, value: f64) -> bool {
        value >= self.valid_min && value <= self.valid_max
    }

    /// True when every present bound respects the ordering invariant.
    #[cfg(test)]
    fn is_well_ordered(&self) -> bool {
        let low = self.critical_low.unwrap_or(self.valid_min);
        let high = self.critical_high.unwrap_or(self.valid_max);
        self.valid_min <= low
            && low <= self.normal_min
            && self.normal_min <= self.normal_max
            && self.normal_max <= high
            && high <= self.valid_max
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BloodPressureRanges {
    pub systolic: VitalRange,
    pub diastolic: VitalRange,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemperatureRanges {
    pub fahrenheit: VitalRange,
    pub celsius: VitalRange,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodSugarRanges {
    pub fasting: VitalRange,
    pub random: VitalRange,
    pub post_meal: VitalRange,
}

/// The full vitals range table.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalRangeTable {
    pub blood_pressure: BloodPressureRanges,
    pub pulse: VitalRange,
    pub temperature: TemperatureRanges,
    pub spo2: VitalRange,
    pub respiratory_rate: VitalRange,
    pub blood_sugar: BloodSugarRanges,
}

const fn range(
    valid: (f64, f64),
    normal: (f64, f64),
    critical_low: Option<f64>,
    critical_high: Option<f64>,
) -> VitalRange {
    VitalRange {
        valid_min: valid.0,
        valid_max: valid.1,
        normal_min: normal.0,
        normal_max: normal.1,
        critical_low,
        critical_high,
        pre_diabetic_max: None,
    }
}

pub static VITAL_RANGES: VitalRangeTable = VitalRangeTable {
    blood_pressure: BloodPressureRanges {
        systolic: range((60.0, 250.0), (90.0, 140.0), Some(80.0), Some(180.0)),
        diastolic: range((40.0, 150.0), (60.0, 90.0), Some(50.0), Some(120.0)),
    },
    pulse: range((30.0, 220.0), (60.0, 100.0), Some(40.0), Some(150.0)),
    temperature: TemperatureRanges {
        fahrenheit: range((95.0, 108.0), (97.0, 99.5), Some(95.0), Some(104.0)),
        celsius: range((35.0, 42.0), (36.1, 37.5), Some(35.0), Some(40.0)),
    },
    spo2: range((70.0, 100.0), (95.0, 100.0), Some(90.0), None),
    respiratory_rate: range((8.0, 60.0), (12.0, 20.0), Some(8.0), Some(30.0)),
    blood_sugar: BloodSugarRanges {
        fasting: VitalRange {
            pre_diabetic_max: Some(126.0),
            ..range((50.0, 500.0), (70.0, 100.0), Some(50.0), Some(400.0))
        },
        random: range((50.0, 500.0), (70.0, 140.0), Some(50.0), Some(400.0)),
        post_meal: range((50.0, 500.0), (70.0, 140.0), Some(50.0), Some(400.0)),
    },
};

/// Read-only view of the vitals range table.
pub fn vital_ranges() -> &'static VitalRangeTable {
    &VITAL_RANGES
}

impl VitalRangeTable {
    /// Sub-table lookup; exhaustive over every vital kind.
    pub fn for_kind(&self, kind: VitalKind) -> &VitalRange {
        match kind {
            VitalKind::Systolic => &self.blood_pressure.systolic,
            VitalKind::Diastolic => &self.blood_pressure.diastolic,
            VitalKind::Pulse => &self.pulse,
            VitalKind::Temperature(TemperatureUnit::Fahrenheit) => &self.temperature.fahrenheit,
            VitalKind::Temperature(TemperatureUnit::Celsius) => &self.temperature.celsius,
            VitalKind::Spo2 => &self.spo2,
            VitalKind::RespiratoryRate => &self.respiratory_rate,
            VitalKind::BloodSugar(GlucoseContext::Fasting) => &self.blood_sugar.fasting,
            VitalKind::BloodSugar(GlucoseContext::Random) => &self.blood_sugar.random,
            VitalKind::BloodSugar(GlucoseContext::PostMeal) => &self.blood_sugar.post_meal,
        }
    }

    #[cfg(test)]
    fn all(&self) -> [&VitalRange; 10] {
        [
            &self.blood_pressure.systolic,
            &self.blood_pressure.diastolic,
            &self.pulse,
            &self.temperature.fahrenheit,
            &self.temperature.celsius,
            &self.spo2,
            &self.respiratory_rate,
            &self.blood_sugar.fasting,
            &self.blood_sugar.random,
            &self.blood_sugar.post_meal,
        ]
    }
}
