use crate::models::enums::TrendDirection;

/// Message template builder for every sentence surfaced to clinicians.
/// Keeps wording in one place so the presentation layer sees stable text.
pub struct MessageTemplates;

impl MessageTemplates {
    // -- Vitals validation ---------------------------------------------------

    pub fn invalid_value(vital: &str) -> String {
        format!("Invalid {} value", vital)
    }

    pub fn out_of_valid_range(vital: &str, value: f64, min: f64, max: f64) -> String {
        format!(
            "{} value {} is outside valid range ({}-{})",
            vital, value, min, max,
        )
    }

    /// `"<Field> <direction>"`, e.g. `"BP Systolic high"`.
    pub fn vital_flag(label: &str, direction: &str) -> String {
        format!("{} {}", label, direction)
    }

    // -- Clinical check summary ----------------------------------------------

    pub fn critical_summary(count: usize) -> String {
        format!("{} CRITICAL ALERT(S) - Immediate attention required", count)
    }

    pub fn high_summary(count: usize) -> String {
        format!("{} high-priority alert(s) requiring attention", count)
    }

    pub fn alerts_present() -> String {
        "Alerts present - review recommended".to_string()
    }

    pub fn no_critical_alerts() -> String {
        "No critical alerts".to_string()
    }

    // -- Elderly safety ------------------------------------------------------

    pub fn elderly_medication(drug: &str) -> String {
        format!("High-Risk Medication for Elderly: {}", drug)
    }

    pub fn elderly_escalation_reason(threshold: u32) -> String {
        format!("Severity escalated due to patient age > {}", threshold)
    }

    pub fn elderly_major_warning() -> String {
        "Increased risk in elderly patients. Consider alternatives or dose reduction."
            .to_string()
    }

    // -- Lab trending --------------------------------------------------------

    pub fn lab_below_range(lab: &str, value: f64, unit: &str) -> String {
        format!("Current {} is below normal range ({} {})", lab, value, unit)
    }

    pub fn lab_above_range(lab: &str, value: f64, unit: &str) -> String {
        format!("Current {} is above normal range ({} {})", lab, value, unit)
    }

    pub fn lab_within_range(lab: &str, value: f64, unit: &str) -> String {
        format!("Current {} is within normal range ({} {})", lab, value, unit)
    }

    pub fn lab_trend(direction: TrendDirection) -> String {
        match direction {
            TrendDirection::IncreasingRapidly => {
                "Values are increasing rapidly - recommend close monitoring"
            }
            TrendDirection::DecreasingRapidly => "Values are decreasing rapidly - recommend evaluation",
            TrendDirection::Increasing => "Values show gradual upward trend",
            TrendDirection::Decreasing => "Values show gradual downward trend",
            TrendDirection::Stable => "Values are relatively stable",
        }
        .to_string()
    }

    pub fn lab_critical_low_banner() -> String {
        "⚠️ CRITICAL LOW VALUE - Immediate attention required".to_string()
    }

    pub fn lab_critical_high_banner() -> String {
        "⚠️ CRITICAL HIGH VALUE - Immediate attention required".to_string()
    }

    pub fn lab_critically_low(lab: &str, value: f64) -> String {
        format!("{} critically low: {}", lab, value)
    }

    pub fn lab_critically_high(lab: &str, value: f64) -> String {
        format!("{} critically high: {}", lab, value)
    }

    pub fn lab_below_normal(lab: &str, value: f64) -> String {
        format!("{} below normal: {}", lab, value)
    }

    pub fn lab_above_normal(lab: &str, value: f64) -> String {
        format!("{} above normal: {}", lab, value)
    }

    pub fn lab_change(lab: &str, change_percent: f64) -> String {
        let sign = if change_percent > 0.0 { "+" } else { "" };
        format!(
            "{} changed {}{}% from previous",
            lab,
            sign,
            change_percent.round(),
        )
    }
}
