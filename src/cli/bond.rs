use super::input::Prompter;
use super::ui::{self, StyleType};
use crate::core::bond::{monthly_repayment, months_from_input};
use crate::core::format_currency;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const HOUSE_VALUE_PROMPT: &str = "Enter current value of the house: £";
const RATE_PROMPT: &str = "Enter annual interest rate (i.e. 7 for 7%): ";
const MONTHS_PROMPT: &str = "Enter how many months you want to repay the bond: ";

/// What the bond workflow collected and computed.
#[derive(Debug, Clone, PartialEq)]
pub struct BondOutcome {
    pub house_value: f64,
    pub rate: f64,
    pub months: u32,
    pub repayment: f64,
}

/// Collects house value, rate and term, then prints the monthly repayment.
///
/// Returns `Ok(None)` when the collected values fail the final check, in
/// which case nothing is computed.
pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Option<BondOutcome>> {
    prompter.say(&format!(
        "\n{}",
        ui::style_text("Bond Repayment Calculator:", StyleType::Title)
    ))?;

    let house_value = prompter.positive_number(HOUSE_VALUE_PROMPT)?;
    let rate = prompter.interest_rate(RATE_PROMPT)?;
    let months_input = prompter.positive_number(MONTHS_PROMPT)?;
    debug!(house_value, rate, months_input, "Collected bond inputs");

    // The reader already guarantees positive values; a term under one month
    // still truncates to zero, so check again before dividing.
    let months = months_from_input(months_input);
    if months == 0 || rate <= 0.0 {
        warn!(months, rate, "Refusing bond calculation");
        prompter.say(&ui::style_text(
            "Invalid input: months and interest rate must be > 0.",
            StyleType::Error,
        ))?;
        return Ok(None);
    }

    let repayment = monthly_repayment(house_value, rate, months)?;
    info!(months, repayment, "Calculated bond repayment");

    let amount = ui::style_text(&format_currency(repayment), StyleType::Result);
    prompter.say(&format!("\nYour monthly repayment will be: {amount}\n"))?;

    Ok(Some(BondOutcome {
        house_value,
        rate,
        months,
        repayment,
    }))
}
