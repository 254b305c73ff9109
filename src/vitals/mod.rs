//! Vitals Classifier: range tables, unit conversion, and per-reading
//! validation.

pub mod convert;
pub mod ranges;
pub mod validate;

pub use convert::{
    bmi_category, calculate_bmi, cm_to_feet_inches, convert_temperature, convert_weight,
    feet_inches_to_cm, inches_to_cm, FeetInches,
};
pub use ranges::{vital_ranges, VitalRange, VitalRangeTable, VITAL_RANGES};
pub use validate::{validate_value, validate_vitals, ValidationResult, VitalsValidation};
