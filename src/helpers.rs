//! Numeric helpers shared by the vitals and lab components.

/// Round to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round1_is_half_away_from_zero() {
        assert_eq!(round1(24.25), 24.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(37.0), 37.0);
    }

    #[test]
    fn round_to_handles_places() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1.25, 1), 1.3);
    }
}
