//! Critical Alert Generator: tiered vital alerts, elderly medication
//! screening and interaction escalation.

pub mod detection;
pub mod elderly;
pub mod engine;
pub mod thresholds;

pub use detection::generate_vital_alerts;
pub use elderly::{
    check_elderly_medication_safety, elderly_high_risk_medications,
    escalate_interactions_for_elderly, ElderlyRiskEntry,
};
pub use engine::{perform_clinical_check, ClinicalCheckParams, ClinicalCheckResult};
pub use thresholds::{critical_thresholds, CriticalThresholds, ThresholdDefinition, ThresholdTier};
