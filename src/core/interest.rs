//! Investment growth under simple or annually compounded interest.

use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterestMode {
    Simple,
    Compound,
}

impl Display for InterestMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InterestMode::Simple => "simple",
                InterestMode::Compound => "compound",
            }
        )
    }
}

impl FromStr for InterestMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(InterestMode::Simple),
            "compound" => Ok(InterestMode::Compound),
            _ => Err(anyhow::anyhow!("Invalid interest mode: {}", s)),
        }
    }
}

impl InterestMode {
    /// Total value of `principal` after `years` at `rate` percent per year.
    pub fn total(&self, principal: f64, rate: f64, years: f64) -> f64 {
        match self {
            InterestMode::Simple => simple_interest_total(principal, rate, years),
            InterestMode::Compound => compound_interest_total(principal, rate, years),
        }
    }
}

/// `principal * (1 + rate/100 * years)`
pub fn simple_interest_total(principal: f64, rate: f64, years: f64) -> f64 {
    principal * (1.0 + (rate / 100.0) * years)
}

/// `principal * (1 + rate/100)^years`. Fractional years are allowed.
pub fn compound_interest_total(principal: f64, rate: f64, years: f64) -> f64 {
    principal * (1.0 + rate / 100.0).powf(years)
}
