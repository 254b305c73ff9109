/// Application-level constants
pub const APP_NAME: &str = "clinical-signals";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Patients at or above this age get elderly medication screening and
/// interaction escalation.
pub const ELDERLY_AGE_THRESHOLD: u32 = 65;

/// A lab value moving more than this percentage from the previous draw
/// raises a `change` alert.
pub const SIGNIFICANT_CHANGE_PERCENT: f64 = 20.0;

/// Regression slopes under this percent of the mean are `stable`.
pub const STABLE_SLOPE_PERCENT: f64 = 1.0;

/// Regression slopes over this percent of the mean are `*_rapidly`.
pub const RAPID_SLOPE_PERCENT: f64 = 5.0;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}
