use serde::{Deserialize, Serialize};

use crate::helpers::round_to;

/// Summary statistics over a chronologically ordered series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    /// Two decimals.
    pub mean: f64,
    /// Upper-middle element of the sorted values for even counts.
    pub median: f64,
    /// Population standard deviation, two decimals.
    pub std_dev: f64,
    pub latest: f64,
    pub previous: Option<f64>,
    pub change: Option<f64>,
    /// `None` when there is no previous value or it is zero.
    pub change_percent: Option<f64>,
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Percent change from `previous` to `latest`, unrounded.
pub fn percent_change(previous: f64, latest: f64) -> Option<f64> {
    (previous != 0.0).then(|| (latest - previous) / previous * 100.0)
}

/// `None` for an empty series.
pub fn calculate_statistics(values: &[f64]) -> Option<Statistics> {
    let (&latest, _) = values.split_last()?;
    let n = values.len();

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

    let previous = (n > 1).then(|| values[n - 2]);

    Some(Statistics {
        count: n,
        min: sorted[0],
        max: sorted[n - 1],
        mean: round_to(mean, 2),
        median: sorted[n / 2],
        std_dev: round_to(variance.sqrt(), 2),
        latest,
        previous,
        change: previous.map(|p| round_to(latest - p, 2)),
        change_percent: previous
            .and_then(|p| percent_change(p, latest))
            .map(|pct| round_to(pct, 2)),
    })
}
