use crate::models::enums::{AlertType, VitalName};
use crate::models::{Alert, AlertValue, VitalsBundle};

use super::thresholds::{critical_thresholds, Reading, ThresholdTier};

// ---------------------------------------------------------------------------
// Vital alert detection
// ---------------------------------------------------------------------------

fn build_alert(vital: VitalName, value: AlertValue, tier: &ThresholdTier) -> Alert {
    let def = &tier.definition;
    Alert {
        alert_type: AlertType::Vital,
        vital,
        value,
        severity: def.severity,
        alert: def.alert.to_string(),
        action: def.action.to_string(),
        color: def.color.to_string(),
    }
}

/// `"180/120"`, or `"180/?"` when the diastolic component is missing.
fn format_pressure(systolic: f64, diastolic: Option<f64>) -> String {
    match diastolic {
        Some(d) => format!("{}/{}", systolic, d),
        None => format!("{}/?", systolic),
    }
}

/// Evaluate each present vital against its tier list and return at most one
/// alert per vital, most severe first.
///
/// Blood pressure requires a systolic reading. Alerts of equal severity keep
/// the order they were produced in: blood pressure, SpO2, pulse, temperature,
/// respiratory rate, blood sugar.
pub fn generate_vital_alerts(vitals: &VitalsBundle) -> Vec<Alert> {
    let thresholds = critical_thresholds();
    let mut alerts = Vec::new();

    let mut evaluate = |vital: VitalName, reading: Reading, value: AlertValue| {
        if let Some(tier) = thresholds.first_match(vital, reading) {
            alerts.push(build_alert(vital, value, tier));
        }
    };

    if let Some(bp) = vitals.blood_pressure {
        if let Some(systolic) = bp.systolic {
            evaluate(
                VitalName::BloodPressure,
                Reading::Pressure { systolic, diastolic: bp.diastolic },
                AlertValue::Text(format_pressure(systolic, bp.diastolic)),
            );
        }
    }

    if let Some(spo2) = vitals.spo2() {
        evaluate(VitalName::Spo2, Reading::Scalar(spo2), AlertValue::Number(spo2));
    }

    if let Some(pulse) = vitals.pulse() {
        evaluate(VitalName::Pulse, Reading::Scalar(pulse), AlertValue::Number(pulse));
    }

    if let Some(temp) = vitals.temperature {
        if let Some(value) = temp.value {
            evaluate(
                VitalName::Temperature,
                Reading::Temperature { value, unit: temp.unit },
                AlertValue::Text(format!("{}°{}", value, temp.unit.symbol())),
            );
        }
    }

    if let Some(rr) = vitals.respiratory_rate() {
        evaluate(VitalName::RespiratoryRate, Reading::Scalar(rr), AlertValue::Number(rr));
    }

    if let Some(sugar) = vitals.blood_sugar.and_then(|s| s.value) {
        evaluate(VitalName::BloodSugar, Reading::Scalar(sugar), AlertValue::Number(sugar));
    }

    // Vec::sort_by_key is stable
    alerts.sort_by_key(|a| a.severity.rank());
    alerts
}
