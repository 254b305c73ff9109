use serde::{Deserialize, Serialize};

use crate::config::{RAPID_SLOPE_PERCENT, STABLE_SLOPE_PERCENT};
use crate::models::enums::TrendDirection;
use crate::helpers::round_to;

use super::statistics::mean;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Units per draw, three decimals.
    pub slope: f64,
    /// R² as a whole percentage.
    pub confidence: u8,
    /// Slope relative to the series mean, two decimals.
    pub slope_percent: f64,
}

impl TrendResult {
    fn flat() -> Self {
        Self {
            direction: TrendDirection::Stable,
            slope: 0.0,
            confidence: 0,
            slope_percent: 0.0,
        }
    }
}

/// Classify a slope expressed as a percentage of the mean.
pub fn classify_slope(slope_percent: f64) -> TrendDirection {
    if slope_percent.abs() < STABLE_SLOPE_PERCENT {
        TrendDirection::Stable
    } else if slope_percent > RAPID_SLOPE_PERCENT {
        TrendDirection::IncreasingRapidly
    } else if slope_percent > 0.0 {
        TrendDirection::Increasing
    } else if slope_percent < -RAPID_SLOPE_PERCENT {
        TrendDirection::DecreasingRapidly
    } else {
        TrendDirection::Decreasing
    }
}

/// Least-squares fit of value against draw index `0..n`.
///
/// Draws are treated as evenly spaced regardless of their dates. Fewer than
/// two values yield a flat, zero-confidence result.
pub fn calculate_trend(values: &[f64]) -> TrendResult {
    let n = values.len();
    if n < 2 {
        return TrendResult::flat();
    }

    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = mean(values);

    let (numerator, denominator) =
        values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(num, den), (i, &y)| {
                let dx = i as f64 - x_mean;
                (num + dx * (y - y_mean), den + dx * dx)
            });

    let slope = if denominator != 0.0 { numerator / denominator } else { 0.0 };

    let (ss_res, ss_tot) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(res, tot), (i, &y)| {
            let predicted = y_mean + slope * (i as f64 - x_mean);
            (res + (y - predicted).powi(2), tot + (y - y_mean).powi(2))
        });

    let r_squared = if ss_tot != 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };
    let slope_percent = if y_mean != 0.0 { slope / y_mean * 100.0 } else { 0.0 };

    TrendResult {
        direction: classify_slope(slope_percent),
        slope: round_to(slope, 3),
        confidence: (r_squared * 100.0).round().clamp(0.0, 100.0) as u8,
        slope_percent: round_to(slope_percent, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_series_is_flat() {
        assert_eq!(calculate_trend(&[]), TrendResult::flat());
        assert_eq!(calculate_trend(&[42.0]).direction, TrendDirection::Stable);
        assert_eq!(calculate_trend(&[42.0]).confidence, 0);
    }

    #[test]
    fn glucose_series_rises_rapidly() {
        let t = calculate_trend(&[90.0, 92.0, 95.0, 130.0]);
        assert_eq!(t.direction, TrendDirection::IncreasingRapidly);
        assert_eq!(t.slope, 12.3);
        assert_eq!(t.slope_percent, 12.09);
        assert!(t.confidence > 0 && t.confidence < 100);
    }

    #[test]
    fn perfect_line_has_full_confidence() {
        let t = calculate_trend(&[10.0, 11.0, 12.0, 13.0]);
        assert_eq!(t.slope, 1.0);
        assert_eq!(t.confidence, 100);
        assert_eq!(t.direction, TrendDirection::IncreasingRapidly);
    }

    #[test]
    fn constant_series_is_stable_zero_confidence() {
        let t = calculate_trend(&[5.0, 5.0, 5.0]);
        assert_eq!(t.direction, TrendDirection::Stable);
        assert_eq!(t.slope, 0.0);
        assert_eq!(t.confidence, 0);
    }

    #[test]
    fn zero_mean_has_zero_slope_percent() {
        let t = calculate_trend(&[-1.0, 1.0]);
        assert_eq!(t.slope, 2.0);
        assert_eq!(t.slope_percent, 0.0);
        assert_eq!(t.direction, TrendDirection::Stable);
    }

    #[test]
    fn slope_bands() {
        assert_eq!(classify_slope(0.99), TrendDirection::Stable);
        assert_eq!(classify_slope(-0.5), TrendDirection::Stable);
        assert_eq!(classify_slope(1.0), TrendDirection::Increasing);
        assert_eq!(classify_slope(5.0), TrendDirection::Increasing);
        assert_eq!(classify_slope(5.01), TrendDirection::IncreasingRapidly);
        assert_eq!(classify_slope(-3.0), TrendDirection::Decreasing);
        assert_eq!(classify_slope(-5.0), TrendDirection::Decreasing);
        assert_eq!(classify_slope(-6.0), TrendDirection::DecreasingRapidly);
    }

    #[test]
    fn gradual_decline() {
        // slope -1 over mean 100 => -1%
        let t = calculate_trend(&[101.5, 100.5, 99.5, 98.5]);
        assert_eq!(t.slope, -1.0);
        assert_eq!(t.direction, TrendDirection::Decreasing);
    }

    proptest! {
        #[test]
        fn confidence_within_bounds(values in prop::collection::vec(1.0f64..500.0, 2..20)) {
            let t = calculate_trend(&values);
            prop_assert!(t.confidence <= 100);
            prop_assert_eq!(&t, &calculate_trend(&values));
        }
    }
}
