use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::messages::MessageTemplates;
use crate::models::enums::Severity;
use crate::models::{Alert, ElderlyMedicationAlert, VitalsBundle};

use super::detection::generate_vital_alerts;
use super::elderly::{check_elderly_medication_safety, is_elderly};

/// Inputs for one combined clinical check. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalCheckParams {
    #[serde(default)]
    pub vitals: Option<VitalsBundle>,
    #[serde(default)]
    pub medications: Option<Vec<String>>,
    #[serde(default)]
    pub patient_age: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalCheckResult {
    pub vital_alerts: Vec<Alert>,
    pub elderly_medication_alerts: Vec<ElderlyMedicationAlert>,
    pub has_critical_alerts: bool,
    pub has_high_alerts: bool,
    pub summary: String,
}

/// Run vital alerting and elderly medication screening together and
/// summarise the result for display.
pub fn perform_clinical_check(params: &ClinicalCheckParams) -> ClinicalCheckResult {
    let start = Instant::now();

    let vital_alerts = params
        .vitals
        .as_ref()
        .map(generate_vital_alerts)
        .unwrap_or_default();

    let elderly_medication_alerts = match (&params.medications, params.patient_age) {
        (Some(meds), Some(age)) if is_elderly(age) => check_elderly_medication_safety(meds, age),
        _ => Vec::new(),
    };

    let critical_count = vital_alerts
        .iter()
        .filter(|a| a.severity == Severity::Critical)
        .count();
    let high_count = vital_alerts
        .iter()
        .filter(|a| a.severity == Severity::High)
        .count()
        + elderly_medication_alerts
            .iter()
            .filter(|a| a.severity == Severity::High)
            .count();

    let summary = if critical_count > 0 {
        MessageTemplates::critical_summary(critical_count)
    } else if high_count > 0 {
        MessageTemplates::high_summary(high_count)
    } else if !vital_alerts.is_empty() || !elderly_medication_alerts.is_empty() {
        MessageTemplates::alerts_present()
    } else {
        MessageTemplates::no_critical_alerts()
    };

    tracing::info!(
        vital_alerts = vital_alerts.len(),
        elderly_alerts = elderly_medication_alerts.len(),
        critical = critical_count,
        high = high_count,
        processing_us = start.elapsed().as_micros() as u64,
        "Clinical check complete"
    );

    ClinicalCheckResult {
        has_critical_alerts: critical_count > 0,
        has_high_alerts: high_count > 0,
        vital_alerts,
        elderly_medication_alerts,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloodPressureReading, Measurement};

    fn bp(systolic: f64, diastolic: f64) -> VitalsBundle {
        VitalsBundle {
            blood_pressure: Some(BloodPressureReading {
                systolic: Some(systolic),
                diastolic: Some(diastolic),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn crisis_bp_flags_critical() {
        let result = perform_clinical_check(&ClinicalCheckParams {
            vitals: Some(bp(200.0, 130.0)),
            ..Default::default()
        });
        assert!(result.has_critical_alerts);
        assert!(result.summary.starts_with("1 CRITICAL"));
        assert_eq!(result.vital_alerts.len(), 1);
    }

    #[test]
    fn empty_params_no_alerts() {
        let result = perform_clinical_check(&ClinicalCheckParams::default());
        assert!(!result.has_critical_alerts);
        assert!(!result.has_high_alerts);
        assert_eq!(result.summary, "No critical alerts");
    }

    #[test]
    fn elderly_high_alerts_count_toward_high_summary() {
        let result = perform_clinical_check(&ClinicalCheckParams {
            vitals: Some(bp(165.0, 90.0)),
            medications: Some(vec!["lorazepam".into(), "meloxicam".into()]),
            patient_age: Some(78),
        });
        assert!(!result.has_critical_alerts);
        assert!(result.has_high_alerts);
        assert_eq!(result.elderly_medication_alerts.len(), 2);
        assert_eq!(result.summary, "2 high-priority alert(s) requiring attention");
    }

    #[test]
    fn moderate_only_reports_alerts_present() {
        let result = perform_clinical_check(&ClinicalCheckParams {
            vitals: Some(VitalsBundle {
                spo2: Some(Measurement { value: Some(93.0) }),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert!(!result.has_high_alerts);
        assert_eq!(result.summary, "Alerts present - review recommended");
    }

    #[test]
    fn medications_skipped_without_age_or_under_threshold() {
        let meds = Some(vec!["diazepam".to_string()]);
        let no_age = perform_clinical_check(&ClinicalCheckParams {
            medications: meds.clone(),
            ..Default::default()
        });
        assert!(no_age.elderly_medication_alerts.is_empty());

        let young = perform_clinical_check(&ClinicalCheckParams {
            medications: meds,
            patient_age: Some(40),
            ..Default::default()
        });
        assert!(young.elderly_medication_alerts.is_empty());
        assert_eq!(young.summary, "No critical alerts");
    }

    #[test]
    fn params_deserialize_from_camel_case() {
        let json = r#"{
            "vitals": { "pulse": { "value": 155 } },
            "medications": ["Haloperidol"],
            "patientAge": 81
        }"#;
        let params: ClinicalCheckParams = serde_json::from_str(json).unwrap();
        let result = perform_clinical_check(&params);
        assert!(result.has_critical_alerts);
        assert!(result.has_high_alerts);
        assert_eq!(result.elderly_medication_alerts[0].drug, "haloperidol");
    }

    #[test]
    fn check_is_idempotent() {
        let params = ClinicalCheckParams {
            vitals: Some(bp(85.0, 55.0)),
            medications: Some(vec!["codeine".into()]),
            patient_age: Some(70),
        };
        assert_eq!(perform_clinical_check(&params), perform_clinical_check(&params));
    }
}
