use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::SIGNIFICANT_CHANGE_PERCENT;
use crate::messages::MessageTemplates;
use crate::models::enums::{LabAlertType, TimeRange, ValueStatus};
use crate::models::{LabAlert, LabPoint};

use super::reference::{normal_ranges, LabReferenceData, NormalRange};
use super::statistics::{calculate_statistics, percent_change, Statistics};
use super::trend::{calculate_trend, TrendResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabDataPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub status: ValueStatus,
}

/// Everything the trend display needs for one analyte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabTrendReport {
    pub lab_name: String,
    pub unit: Option<String>,
    pub normal_range: Option<RangeBounds>,
    pub data: Vec<LabDataPoint>,
    pub statistics: Option<Statistics>,
    pub trend: Option<TrendResult>,
    pub analysis: Vec<String>,
    pub alerts: Vec<LabAlert>,
}

impl LabTrendReport {
    fn empty(lab_name: &str) -> Self {
        Self {
            lab_name: lab_name.to_string(),
            unit: None,
            normal_range: None,
            data: Vec::new(),
            statistics: None,
            trend: None,
            analysis: Vec::new(),
            alerts: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableLab {
    pub name: String,
    pub has_normal_range: bool,
    pub unit: Option<String>,
}

/// Critical bounds first, then the normal range. Critical comparisons are
/// strict.
pub fn value_status(value: f64, range: Option<&NormalRange>) -> ValueStatus {
    let Some(range) = range else {
        return ValueStatus::Unknown;
    };

    if range.critical_low.is_some_and(|low| value < low) {
        ValueStatus::CriticalLow
    } else if range.critical_high.is_some_and(|high| value > high) {
        ValueStatus::CriticalHigh
    } else if value < range.min {
        ValueStatus::Low
    } else if value > range.max {
        ValueStatus::High
    } else {
        ValueStatus::Normal
    }
}

/// Status sentence and trend sentence, with a critical banner in front when
/// the latest value crosses a critical bound.
pub fn generate_analysis(
    lab_name: &str,
    latest: f64,
    range: Option<&NormalRange>,
    trend: &TrendResult,
) -> Vec<String> {
    let mut analysis = Vec::new();

    if let Some(range) = range {
        match value_status(latest, Some(range)) {
            ValueStatus::CriticalLow => analysis.push(MessageTemplates::lab_critical_low_banner()),
            ValueStatus::CriticalHigh => {
                analysis.push(MessageTemplates::lab_critical_high_banner())
            }
            _ => {}
        }

        let sentence = if latest < range.min {
            MessageTemplates::lab_below_range(lab_name, latest, &range.unit)
        } else if latest > range.max {
            MessageTemplates::lab_above_range(lab_name, latest, &range.unit)
        } else {
            MessageTemplates::lab_within_range(lab_name, latest, &range.unit)
        };
        analysis.push(sentence);
    }

    analysis.push(MessageTemplates::lab_trend(trend.direction));
    analysis
}

/// Status alert for the latest value, then a change alert when it moved
/// more than the significant-change percentage from the previous draw.
pub fn generate_alerts(lab_name: &str, values: &[f64], range: Option<&NormalRange>) -> Vec<LabAlert> {
    let mut alerts = Vec::new();
    let Some((&latest, earlier)) = values.split_last() else {
        return alerts;
    };

    let status_alert = match value_status(latest, range) {
        ValueStatus::CriticalLow => Some((
            LabAlertType::Critical,
            MessageTemplates::lab_critically_low(lab_name, latest),
        )),
        ValueStatus::CriticalHigh => Some((
            LabAlertType::Critical,
            MessageTemplates::lab_critically_high(lab_name, latest),
        )),
        ValueStatus::Low => Some((
            LabAlertType::Abnormal,
            MessageTemplates::lab_below_normal(lab_name, latest),
        )),
        ValueStatus::High => Some((
            LabAlertType::Abnormal,
            MessageTemplates::lab_above_normal(lab_name, latest),
        )),
        ValueStatus::Normal | ValueStatus::Unknown => None,
    };

    if let Some((alert_type, message)) = status_alert {
        alerts.push(LabAlert { alert_type, message });
    }

    if let Some(change) = earlier.last().and_then(|&prev| percent_change(prev, latest)) {
        if change.abs() > SIGNIFICANT_CHANGE_PERCENT {
            alerts.push(LabAlert {
                alert_type: LabAlertType::Change,
                message: MessageTemplates::lab_change(lab_name, change),
            });
        }
    }

    alerts
}

fn analyze_with(reference: &LabReferenceData, series: &[LabPoint], lab_name: &str) -> LabTrendReport {
    if series.is_empty() {
        return LabTrendReport::empty(lab_name);
    }

    let start = Instant::now();
    let range = reference.get(lab_name);
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();

    let statistics = calculate_statistics(&values);
    let trend = calculate_trend(&values);
    let latest = values[values.len() - 1];

    let unit = range
        .map(|r| r.unit.clone())
        .filter(|u| !u.is_empty())
        .or_else(|| series.iter().find_map(|p| p.unit.clone()));

    let report = LabTrendReport {
        lab_name: lab_name.to_string(),
        unit,
        normal_range: range.map(|r| RangeBounds { min: r.min, max: r.max }),
        data: series
            .iter()
            .map(|p| LabDataPoint {
                date: p.date,
                value: p.value,
                status: value_status(p.value, range),
            })
            .collect(),
        statistics,
        analysis: generate_analysis(lab_name, latest, range, &trend),
        alerts: generate_alerts(lab_name, &values, range),
        trend: Some(trend),
    };

    tracing::debug!(
        lab = lab_name,
        points = series.len(),
        alerts = report.alerts.len(),
        processing_us = start.elapsed().as_micros() as u64,
        "Lab trend analysis complete"
    );

    report
}

/// Trend analysis over one injected reference table.
#[derive(Debug, Clone)]
pub struct LabTrendAnalyzer {
    reference: LabReferenceData,
}

impl Default for LabTrendAnalyzer {
    fn default() -> Self {
        Self::new(LabReferenceData::builtin())
    }
}

impl LabTrendAnalyzer {
    pub fn new(reference: LabReferenceData) -> Self {
        Self { reference }
    }

    pub fn normal_ranges(&self) -> &LabReferenceData {
        &self.reference
    }

    /// Analyse a series already sorted by collection date, oldest first.
    pub fn analyze(&self, series: &[LabPoint], lab_name: &str) -> LabTrendReport {
        analyze_with(&self.reference, series, lab_name)
    }

    /// Analyse only the points collected on or after `as_of - range`.
    pub fn analyze_window(
        &self,
        series: &[LabPoint],
        lab_name: &str,
        range: TimeRange,
        as_of: NaiveDate,
    ) -> LabTrendReport {
        let windowed: Vec<LabPoint> = match window_start(range, as_of) {
            Some(cutoff) => series.iter().filter(|p| p.date >= cutoff).cloned().collect(),
            None => series.to_vec(),
        };
        self.analyze(&windowed, lab_name)
    }

    /// One report per analyte, keyed and ordered by name.
    pub fn analyze_many(
        &self,
        series_by_lab: &BTreeMap<String, Vec<LabPoint>>,
    ) -> BTreeMap<String, LabTrendReport> {
        series_by_lab
            .iter()
            .map(|(name, series)| (name.clone(), self.analyze(series, name)))
            .collect()
    }

    pub fn available_labs<I, S>(&self, names: I) -> Vec<AvailableLab>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                let range = self.reference.get(name);
                AvailableLab {
                    name: name.to_string(),
                    has_normal_range: range.is_some(),
                    unit: range.map(|r| r.unit.clone()),
                }
            })
            .collect()
    }
}

/// First date inside the window. `None` when the subtraction underflows
/// the calendar, in which case nothing is excluded.
pub fn window_start(range: TimeRange, as_of: NaiveDate) -> Option<NaiveDate> {
    as_of.checked_sub_months(Months::new(range.months()))
}

/// Analyse a series against the built-in reference table.
pub fn analyze_trend(series: &[LabPoint], lab_name: &str) -> LabTrendReport {
    analyze_with(normal_ranges(), series, lab_name)
}
