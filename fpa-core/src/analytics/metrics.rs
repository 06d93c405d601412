//! Price deltas.
//!
//! Prices are stored in major currency units while deltas are reported in
//! hundreds, so both metrics divide by [`SUBUNIT_DIVISOR`]. Missing inputs,
//! a zero baseline, or any non-finite intermediate yield `0`.

/// The fixed normalization applied to every delta.
pub const SUBUNIT_DIVISOR: f64 = 100.0;

/// `(latest - previous) / 100`, rounded to 2 decimal places.
pub fn change(latest: Option<f64>, previous: Option<f64>) -> f64 {
    match (latest, previous) {
        (Some(latest), Some(previous)) => round_to((latest - previous) / SUBUNIT_DIVISOR, 2),
        _ => 0.0,
    }
}

/// `(latest - previous) / previous / 100`, rounded to 4 decimal places.
pub fn percentage_change(latest: Option<f64>, previous: Option<f64>) -> f64 {
    match (latest, previous) {
        (Some(latest), Some(previous)) if previous != 0.0 => {
            round_to((latest - previous) / previous / SUBUNIT_DIVISOR, 4)
        }
        _ => 0.0,
    }
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() { rounded } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn lagos_week_over_week() {
        assert_eq!(change(Some(770.0), Some(700.0)), 0.70);
        assert_eq!(percentage_change(Some(770.0), Some(700.0)), 0.0010);
    }

    #[rstest]
    #[case(None, Some(700.0))]
    #[case(Some(770.0), None)]
    #[case(None, None)]
    fn missing_inputs_are_zero(#[case] latest: Option<f64>, #[case] previous: Option<f64>) {
        assert_eq!(change(latest, previous), 0.0);
        assert_eq!(percentage_change(latest, previous), 0.0);
    }

    #[test]
    fn zero_baseline_has_no_percentage() {
        assert_eq!(percentage_change(Some(650.0), Some(0.0)), 0.0);
        assert_eq!(change(Some(650.0), Some(0.0)), 6.5);
    }

    #[test]
    fn decreases_are_negative() {
        assert_eq!(change(Some(600.0), Some(650.0)), -0.5);
        assert_eq!(percentage_change(Some(600.0), Some(800.0)), -0.0025);
    }

    #[rstest]
    #[case(1.005, 2, 1.0)] // 1.005 is stored just below the midpoint
    #[case(0.125, 2, 0.13)]
    #[case(-0.125, 2, -0.13)]
    #[case(0.00123456, 4, 0.0012)]
    #[case(f64::INFINITY, 2, 0.0)]
    #[case(f64::NAN, 4, 0.0)]
    fn rounds_to_places(#[case] value: f64, #[case] places: i32, #[case] expected: f64) {
        assert_eq!(round_to(value, places), expected);
    }
}
