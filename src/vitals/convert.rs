//! Unit conversions and the derived BMI metric.
//!
//! Every converted value is rounded to one decimal place, half away from
//! zero, so results are reproducible bit for bit.

use serde::{Deserialize, Serialize};

use crate::helpers::round1;
use crate::models::enums::BmiCategory;
use crate::models::{HeightUnit, TemperatureUnit, WeightUnit};

pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;
pub const CENTIMETERS_PER_INCH: f64 = 2.54;

pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
            round1((value - 32.0) * 5.0 / 9.0)
        }
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
            round1(value * 9.0 / 5.0 + 32.0)
        }
        _ => value,
    }
}

pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Kilograms, WeightUnit::Pounds) => round1(value * POUNDS_PER_KILOGRAM),
        (WeightUnit::Pounds, WeightUnit::Kilograms) => round1(value / POUNDS_PER_KILOGRAM),
        _ => value,
    }
}

/// Imperial rendering of a height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeetInches {
    pub feet: u32,
    pub inches: u32,
    /// Total height in inches, one decimal.
    pub total_inches: f64,
}

pub fn cm_to_feet_inches(cm: f64) -> FeetInches {
    let total = cm / CENTIMETERS_PER_INCH;
    let mut feet = (total / 12.0).floor() as u32;
    let mut inches = (total % 12.0).round() as u32;
    // 71.6 in reads as 6 ft 0 in, not 5 ft 12 in
    if inches == 12 {
        feet += 1;
        inches = 0;
    }
    FeetInches {
        feet,
        inches,
        total_inches: round1(total),
    }
}

pub fn inches_to_cm(inches: f64) -> f64 {
    round1(inches * CENTIMETERS_PER_INCH)
}

/// Height given as feet plus inches, in centimetres.
pub fn feet_inches_to_cm(feet: u32, inches: f64) -> f64 {
    inches_to_cm(f64::from(feet) * 12.0 + inches)
}

/// BMI from weight and height in any supported units.
///
/// Imperial inputs are converted first (each conversion rounded to 0.1).
/// Returns `None` when either converted measure is zero or not finite.
pub fn calculate_bmi(
    weight: f64,
    weight_unit: WeightUnit,
    height: f64,
    height_unit: HeightUnit,
) -> Option<f64> {
    let weight_kg = convert_weight(weight, weight_unit, WeightUnit::Kilograms);
    let height_cm = match height_unit {
        HeightUnit::Centimeters => height,
        HeightUnit::Inches => inches_to_cm(height),
    };

    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg == 0.0 || height_cm == 0.0 {
        return None;
    }

    let height_m = height_cm / 100.0;
    Some(round1(weight_kg / (height_m * height_m)))
}

/// Half-open bands, lower bound inclusive.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_temperatures() {
        use TemperatureUnit::*;
        assert_eq!(convert_temperature(98.6, Fahrenheit, Celsius), 37.0);
        assert_eq!(convert_temperature(40.0, Celsius, Fahrenheit), 104.0);
        assert_eq!(convert_temperature(101.3, Fahrenheit, Fahrenheit), 101.3);
    }

    #[test]
    fn weight_conversions() {
        use WeightUnit::*;
        assert_eq!(convert_weight(70.0, Kilograms, Pounds), 154.3);
        assert_eq!(convert_weight(154.0, Pounds, Kilograms), 69.9);
        assert_eq!(convert_weight(80.0, Kilograms, Kilograms), 80.0);
    }

    #[test]
    fn height_conversions() {
        let fi = cm_to_feet_inches(175.0);
        assert_eq!(fi.feet, 5);
        assert_eq!(fi.inches, 9);
        assert_eq!(fi.total_inches, 68.9);
        assert_eq!(inches_to_cm(68.0), 172.7);
        assert_eq!(feet_inches_to_cm(5, 8.0), 172.7);
    }

    #[test]
    fn height_never_reports_twelve_inches() {
        let fi = cm_to_feet_inches(182.0);
        assert_eq!((fi.feet, fi.inches), (6, 0));
    }

    #[test]
    fn bmi_metric() {
        let bmi = calculate_bmi(70.0, WeightUnit::Kilograms, 170.0, HeightUnit::Centimeters);
        assert_eq!(bmi, Some(24.2));
    }

    #[test]
    fn bmi_pounds_are_rounded_before_use() {
        // 154 lb -> 69.9 kg
        let bmi = calculate_bmi(154.0, WeightUnit::Pounds, 170.0, HeightUnit::Centimeters);
        assert_eq!(bmi, Some(round1(69.9 / (1.7 * 1.7))));
    }

    #[test]
    fn bmi_inches() {
        // 68 in -> 172.7 cm
        let bmi = calculate_bmi(70.0, WeightUnit::Kilograms, 68.0, HeightUnit::Inches);
        assert_eq!(bmi, Some(round1(70.0 / (1.727 * 1.727))));
    }

    #[test]
    fn bmi_zero_inputs_are_none() {
        assert_eq!(calculate_bmi(0.0, WeightUnit::Kilograms, 170.0, HeightUnit::Centimeters), None);
        assert_eq!(calculate_bmi(70.0, WeightUnit::Kilograms, 0.0, HeightUnit::Centimeters), None);
        assert_eq!(
            calculate_bmi(f64::NAN, WeightUnit::Kilograms, 170.0, HeightUnit::Centimeters),
            None
        );
    }

    #[test]
    fn bmi_category_boundaries_are_lower_inclusive() {
        assert_eq!(bmi_category(18.4), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Normal);
        assert_eq!(bmi_category(24.9), BmiCategory::Normal);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
    }

    proptest! {
        #[test]
        fn bmi_matches_formula(w in 30.0f64..=200.0, h in 100.0f64..=220.0) {
            let expected = round1(w / ((h / 100.0) * (h / 100.0)));
            let got = calculate_bmi(w, WeightUnit::Kilograms, h, HeightUnit::Centimeters);
            prop_assert_eq!(got, Some(expected));
        }

        #[test]
        fn bmi_monotonic_in_weight(w in 30.0f64..=190.0, h in 100.0f64..=220.0) {
            let lighter = calculate_bmi(w, WeightUnit::Kilograms, h, HeightUnit::Centimeters).unwrap();
            let heavier = calculate_bmi(w + 10.0, WeightUnit::Kilograms, h, HeightUnit::Centimeters).unwrap();
            prop_assert!(heavier > lighter);
        }

        #[test]
        fn bmi_monotonic_in_height(w in 30.0f64..=200.0, h in 100.0f64..=200.0) {
            let shorter = calculate_bmi(w, WeightUnit::Kilograms, h, HeightUnit::Centimeters).unwrap();
            let taller = calculate_bmi(w, WeightUnit::Kilograms, h + 20.0, HeightUnit::Centimeters).unwrap();
            prop_assert!(taller < shorter);
        }

        #[test]
        fn fahrenheit_round_trip_within_tolerance(f in 95.0f64..=108.0) {
            let c = convert_temperature(f, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
            let back = convert_temperature(c, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
            prop_assert!((back - f).abs() <= 0.2 + 1e-9);
        }

        #[test]
        fn celsius_round_trip_within_tolerance(c in 35.0f64..=42.0) {
            let f = convert_temperature(c, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
            let back = convert_temperature(f, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
            prop_assert!((back - c).abs() <= 0.2 + 1e-9);
        }
    }
}
