use serde::Serialize;

use crate::config::ELDERLY_AGE_THRESHOLD;
use crate::messages::MessageTemplates;
use crate::models::enums::{AlertType, MedicationCategory, Severity};
use crate::models::{DrugInteraction, ElderlyMedicationAlert, InteractionSeverity};

use super::thresholds::severity_color;

/// One drug class on the elderly high-risk formulary.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ElderlyRiskEntry {
    pub category: MedicationCategory,
    pub drugs: &'static [&'static str],
    pub risk: &'static str,
    pub recommendation: &'static str,
    pub severity: Severity,
}

pub static ELDERLY_HIGH_RISK_MEDICATIONS: [ElderlyRiskEntry; 7] = [
    ElderlyRiskEntry {
        category: MedicationCategory::Benzodiazepines,
        drugs: &["diazepam", "lorazepam", "alprazolam", "clonazepam", "temazepam", "midazolam"],
        risk: "Increased risk of falls, cognitive impairment, and delirium",
        recommendation: "Avoid if possible. Use lowest effective dose for shortest duration.",
        severity: Severity::High,
    },
    ElderlyRiskEntry {
        category: MedicationCategory::Anticholinergics,
        drugs: &["diphenhydramine", "hydroxyzine", "oxybutynin", "tolterodine", "amitriptyline"],
        risk: "Cognitive impairment, confusion, constipation, urinary retention",
        recommendation: "Avoid. Use alternatives with less anticholinergic activity.",
        severity: Severity::High,
    },
    ElderlyRiskEntry {
        category: MedicationCategory::Nsaids,
        drugs: &["ibuprofen", "naproxen", "diclofenac", "indomethacin", "ketorolac", "meloxicam"],
        risk: "GI bleeding, renal impairment, cardiovascular events",
        recommendation: "Use lowest effective dose for shortest duration. Consider acetaminophen.",
        severity: Severity::Moderate,
    },
    ElderlyRiskEntry {
        category: MedicationCategory::Opioids,
        drugs: &["morphine", "oxycodone", "hydrocodone", "fentanyl", "tramadol", "codeine"],
        risk: "Falls, respiratory depression, constipation, cognitive impairment",
        recommendation: "Start low, go slow. Use non-opioid alternatives when possible.",
        severity: Severity::High,
    },
    ElderlyRiskEntry {
        category: MedicationCategory::Antipsychotics,
        drugs: &["haloperidol", "risperidone", "olanzapine", "quetiapine", "aripiprazole"],
        risk: "Increased mortality in dementia patients, falls, stroke risk",
        recommendation: "Avoid in dementia. Use only for approved indications.",
        severity: Severity::High,
    },
    ElderlyRiskEntry {
        category: MedicationCategory::Sulfonylureas,
        drugs: &["glyburide", "glipizide", "glimepiride"],
        risk: "Prolonged hypoglycemia",
        recommendation: "Avoid glyburide. Use shorter-acting agents with caution.",
        severity: Severity::Moderate,
    },
    ElderlyRiskEntry {
        category: MedicationCategory::MuscleRelaxants,
        drugs: &["cyclobenzaprine", "methocarbamol", "carisoprodol", "metaxalone"],
        risk: "Sedation, falls, anticholinergic effects",
        recommendation: "Avoid. Effectiveness questionable in elderly.",
        severity: Severity::Moderate,
    },
];

/// Read-only view of the elderly high-risk formulary.
pub fn elderly_high_risk_medications() -> &'static [ElderlyRiskEntry] {
    &ELDERLY_HIGH_RISK_MEDICATIONS
}

pub fn is_elderly(age: u32) -> bool {
    age >= ELDERLY_AGE_THRESHOLD
}

/// Case-insensitive substring match in either direction, so that
/// "Ibuprofen 200mg" and "codeine" inside "acetaminophen/codeine" both hit.
fn names_match(medication: &str, catalog_drug: &str) -> bool {
    medication.contains(catalog_drug) || catalog_drug.contains(medication)
}

/// Screen a medication list against the elderly formulary.
///
/// Returns one alert per matched catalog drug, `high` before `moderate`,
/// catalog order within a severity. Empty when the patient is under the
/// elderly threshold or no medications are given. Blank names are ignored.
pub fn check_elderly_medication_safety(
    medications: &[String],
    age: u32,
) -> Vec<ElderlyMedicationAlert> {
    if !is_elderly(age) || medications.is_empty() {
        return Vec::new();
    }

    let normalized: Vec<String> = medications
        .iter()
        .map(|m| m.trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect();

    let mut alerts = Vec::new();
    for entry in &ELDERLY_HIGH_RISK_MEDICATIONS {
        for &drug in entry.drugs {
            if !normalized.iter().any(|m| names_match(m, drug)) {
                continue;
            }
            alerts.push(ElderlyMedicationAlert {
                alert_type: AlertType::ElderlySafety,
                category: entry.category,
                drug: drug.to_string(),
                severity: entry.severity,
                alert: MessageTemplates::elderly_medication(drug),
                risk: entry.risk.to_string(),
                recommendation: entry.recommendation.to_string(),
                color: severity_color(entry.severity).to_string(),
            });
        }
    }

    alerts.sort_by_key(|a| a.severity.rank());

    if !alerts.is_empty() {
        tracing::debug!(age, matched = alerts.len(), "Elderly high-risk medications found");
    }

    alerts
}

/// Adjust externally computed interaction severities for an elderly patient.
///
/// At or above the threshold, `moderate` becomes `major` (with the original
/// kept and `elderly_escalated` set) and existing `major` entries gain an
/// advisory. Below the threshold the list is returned unchanged.
pub fn escalate_interactions_for_elderly(
    interactions: &[DrugInteraction],
    age: u32,
) -> Vec<DrugInteraction> {
    if !is_elderly(age) {
        return interactions.to_vec();
    }

    interactions
        .iter()
        .map(|interaction| {
            let mut escalated = interaction.clone();
            match &interaction.severity {
                InteractionSeverity::Moderate => {
                    escalated.original_severity = Some(InteractionSeverity::Moderate);
                    escalated.severity = InteractionSeverity::Major;
                    escalated.severity_level = Some(2);
                    escalated.elderly_escalated = true;
                    escalated.escalation_reason =
                        Some(MessageTemplates::elderly_escalation_reason(ELDERLY_AGE_THRESHOLD));
                }
                InteractionSeverity::Major => {
                    escalated.elderly_warning = Some(MessageTemplates::elderly_major_warning());
                }
                _ => {}
            }
            escalated
        })
        .collect()
}
