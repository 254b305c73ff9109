use serde::{Deserialize, Serialize};

use super::enums::{AlertType, LabAlertType, MedicationCategory, Severity, VitalName};

/// Reading shown alongside an alert: a bare number, or a composed
/// display such as `"180/120"` or `"104°F"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlertValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for AlertValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertValue::Number(v) => write!(f, "{}", v),
            AlertValue::Text(s) => f.write_str(s),
        }
    }
}

/// A vital-sign alert for clinician display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub vital: VitalName,
    pub value: AlertValue,
    pub severity: Severity,
    pub alert: String,
    pub action: String,
    pub color: String,
}

/// A high-risk-medication finding for a patient at or above the elderly threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElderlyMedicationAlert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub category: MedicationCategory,
    pub drug: String,
    pub severity: Severity,
    pub alert: String,
    pub risk: String,
    pub recommendation: String,
    pub color: String,
}

/// Interaction severity as reported by the external interaction service.
/// Values outside the known four are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InteractionSeverity {
    Contraindicated,
    Major,
    Moderate,
    Minor,
    Other(String),
}

impl InteractionSeverity {
    pub fn as_str(&self) -> &str {
        match self {
            InteractionSeverity::Contraindicated => "contraindicated",
            InteractionSeverity::Major => "major",
            InteractionSeverity::Moderate => "moderate",
            InteractionSeverity::Minor => "minor",
            InteractionSeverity::Other(raw) => raw,
        }
    }
}

impl From<String> for InteractionSeverity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "contraindicated" => InteractionSeverity::Contraindicated,
            "major" => InteractionSeverity::Major,
            "moderate" => InteractionSeverity::Moderate,
            "minor" => InteractionSeverity::Minor,
            _ => InteractionSeverity::Other(raw),
        }
    }
}

impl From<InteractionSeverity> for String {
    fn from(severity: InteractionSeverity) -> Self {
        match severity {
            InteractionSeverity::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for InteractionSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A drug-drug interaction record computed upstream. Fields this engine
/// does not interpret are carried through `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugInteraction {
    #[serde(default)]
    pub drug1: String,
    #[serde(default)]
    pub drug2: String,
    pub severity: InteractionSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_severity: Option<InteractionSeverity>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub elderly_escalated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elderly_warning: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DrugInteraction {
    pub fn new(drug1: &str, drug2: &str, severity: InteractionSeverity) -> Self {
        Self {
            drug1: drug1.to_string(),
            drug2: drug2.to_string(),
            severity,
            severity_level: None,
            original_severity: None,
            elderly_escalated: false,
            escalation_reason: None,
            elderly_warning: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// A lab-trend alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabAlert {
    #[serde(rename = "type")]
    pub alert_type: LabAlertType,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&AlertValue::Number(88.0)).unwrap(), "88.0");
        assert_eq!(
            serde_json::to_string(&AlertValue::Text("180/120".into())).unwrap(),
            "\"180/120\""
        );
        assert_eq!(AlertValue::Number(88.0).to_string(), "88");
    }

    #[test]
    fn interaction_keeps_unknown_fields() {
        let json = r#"{
            "drug1": "warfarin",
            "drug2": "aspirin",
            "severity": "moderate",
            "severityLevel": 3,
            "mechanism": "additive bleeding risk"
        }"#;
        let interaction: DrugInteraction = serde_json::from_str(json).unwrap();
        assert_eq!(interaction.severity, InteractionSeverity::Moderate);
        assert_eq!(interaction.severity_level, Some(3));
        assert_eq!(
            interaction.extra.get("mechanism").and_then(|v| v.as_str()),
            Some("additive bleeding risk")
        );
        assert!(!interaction.elderly_escalated);
    }

    #[test]
    fn interaction_unrecognised_severity_is_kept_verbatim() {
        let json = r#"{ "drug1": "a", "drug2": "b", "severity": "severe" }"#;
        let interaction: DrugInteraction = serde_json::from_str(json).unwrap();
        assert_eq!(interaction.severity, InteractionSeverity::Other("severe".into()));
        assert_eq!(interaction.severity.to_string(), "severe");

        let out = serde_json::to_value(&interaction).unwrap();
        assert_eq!(out["severity"], "severe");
    }

    #[test]
    fn interaction_serializes_back_to_its_input() {
        let json = r#"{"drug1":"warfarin","drug2":"aspirin","severity":"major","severityLevel":1,"source":"rxnav"}"#;
        let interaction: DrugInteraction = serde_json::from_str(json).unwrap();
        let input: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_value(&interaction).unwrap(), input);
    }
}
