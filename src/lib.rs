//! Clinical signal classification: vitals validation, tiered critical
//! alerting with elderly safety screening, and lab trend analysis.
//!
//! Every operation is a pure function over its inputs and the static
//! read-only tables, safe to call from any number of threads.

pub mod alerts; // Critical Alert Generator
pub mod config;
mod helpers;
pub mod labs; // Lab Trend Analyzer
pub mod messages;
pub mod models;
pub mod vitals; // Vitals Classifier

pub use alerts::{
    check_elderly_medication_safety, critical_thresholds, elderly_high_risk_medications,
    escalate_interactions_for_elderly, generate_vital_alerts, perform_clinical_check,
    ClinicalCheckParams, ClinicalCheckResult,
};
pub use labs::{analyze_trend, normal_ranges, LabReferenceData, LabTrendAnalyzer, LabTrendReport};
pub use vitals::{validate_value, validate_vitals, vital_ranges, ValidationResult, VitalsValidation};

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, or by
/// [`config::default_log_filter`] when unset. A no-op when the host has
/// already installed a global subscriber.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{} logging initialised", config::APP_NAME, config::APP_VERSION);
    }
}
