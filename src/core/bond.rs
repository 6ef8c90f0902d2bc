//! Fixed monthly repayment for an amortising home loan.

use anyhow::{Result, ensure};
use tracing::debug;

/// Converts an annual percentage rate into a monthly fractional rate.
pub fn monthly_rate(annual_rate: f64) -> f64 {
    (annual_rate / 100.0) / 12.0
}

/// Truncates a month count read from the user to whole months.
pub fn months_from_input(value: f64) -> u32 {
    // `as` saturates, so huge or negative inputs clamp to the u32 range.
    value.trunc() as u32
}

/// Payment that fully repays `house_value` over `months` at `annual_rate` percent.
///
/// `(r * P) / (1 - (1 + r)^-n)` with `r` the monthly rate. A zero term would
/// divide by zero and is refused. Rates too small to move `1 + r` away from
/// one fall back to the zero-interest limit `P / n`.
pub fn monthly_repayment(house_value: f64, annual_rate: f64, months: u32) -> Result<f64> {
    ensure!(months > 0, "Repayment term must be at least one month");
    ensure!(annual_rate > 0.0, "Interest rate must be greater than zero");

    let rate = monthly_rate(annual_rate);
    let denominator = 1.0 - (1.0 + rate).powf(-f64::from(months));
    let repayment = if denominator > 0.0 {
        (rate * house_value) / denominator
    } else {
        house_value / f64::from(months)
    };
    ensure!(repayment.is_finite(), "Repayment is too large to represent");
    debug!(house_value, annual_rate, months, repayment, "Computed bond repayment");
    Ok(repayment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn computes_monthly_rate() {
        assert_relative_eq!(monthly_rate(7.0), 0.07 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(monthly_rate(12.0), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn matches_amortisation_formula() {
        let r: f64 = 0.07 / 12.0;
        let expected = (r * 200_000.0) / (1.0 - (1.0 + r).powf(-240.0));
        let repayment = monthly_repayment(200_000.0, 7.0, 240).unwrap();
        assert_relative_eq!(repayment, expected, epsilon = 1e-9);
        assert!((repayment - 1550.60).abs() < 0.01);
    }

    #[test]
    fn single_month_repays_principal_plus_one_month_interest() {
        let repayment = monthly_repayment(1200.0, 12.0, 1).unwrap();
        assert_relative_eq!(repayment, 1212.0, epsilon = 1e-9);
    }

    #[test]
    fn payments_cover_the_principal() {
        let months = 360;
        let repayment = monthly_repayment(150_000.0, 5.5, months).unwrap();
        assert!(repayment * f64::from(months) > 150_000.0);
    }

    #[test]
    fn refuses_zero_months() {
        let err = monthly_repayment(200_000.0, 7.0, 0).unwrap_err();
        assert!(err.to_string().contains("at least one month"));
    }

    #[test]
    fn refuses_zero_rate() {
        assert!(monthly_repayment(200_000.0, 0.0, 12).is_err());
    }

    #[test]
    fn tiny_rate_falls_back_to_straight_line() {
        let repayment = monthly_repayment(200_000.0, 1e-14, 240).unwrap();
        assert!(repayment.is_finite());
        assert_relative_eq!(repayment, 200_000.0 / 240.0, epsilon = 1e-6);
    }

    #[test]
    fn repayment_is_positive() {
        for house_value in [1.0, 950.0, 200_000.0, 3_500_000.0] {
            for rate in [0.1, 7.0, 19.5] {
                for months in [1, 12, 240, 600] {
                    let repayment = monthly_repayment(house_value, rate, months).unwrap();
                    assert!(repayment > 0.0, "{house_value} {rate} {months}");
                }
            }
        }
    }

    #[test]
    fn repayment_grows_with_house_value() {
        let mut previous = 0.0;
        for house_value in [1_000.0, 10_000.0, 100_000.0, 100_001.0, 1_000_000.0] {
            let repayment = monthly_repayment(house_value, 7.0, 240).unwrap();
            assert!(repayment > previous);
            previous = repayment;
        }
    }

    #[test]
    fn truncates_months() {
        assert_eq!(months_from_input(240.9), 240);
        assert_eq!(months_from_input(1.0), 1);
        assert_eq!(months_from_input(0.5), 0);
    }
}
