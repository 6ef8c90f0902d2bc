use super::input::Prompter;
use super::ui::{self, StyleType};
use crate::core::{InterestMode, format_currency};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const DEPOSIT_PROMPT: &str = "Enter the amount you want to Deposit: £";
const RATE_PROMPT: &str = "Enter the interest rate (i.e. 8 for 8%): ";
const YEARS_PROMPT: &str = "Enter the number of years you want to invest: ";
const MODE_PROMPT: &str = "Do you want 'simple' or 'compound' interest?: ";

/// What the investment workflow collected and computed.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentOutcome {
    pub principal: f64,
    pub rate: f64,
    pub years: f64,
    pub mode: InterestMode,
    pub total: f64,
}

/// Collects deposit, rate, duration and interest mode, then prints the final value.
pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<InvestmentOutcome> {
    prompter.say(&format!(
        "\n{}",
        ui::style_text("Investment Calculator:", StyleType::Title)
    ))?;

    let principal = prompter.positive_number(DEPOSIT_PROMPT)?;
    let rate = prompter.interest_rate(RATE_PROMPT)?;
    let years = prompter.positive_number(YEARS_PROMPT)?;
    let mode = prompter.interest_mode(MODE_PROMPT)?;
    debug!(principal, rate, years, %mode, "Collected investment inputs");

    let total = mode.total(principal, rate, years);
    info!(%mode, total, "Calculated investment value");

    let worth = ui::style_text(&format_currency(total), StyleType::Result);
    prompter.say(&format!(
        "\nAfter {years:.0} years, your investment will be worth: {worth}\n"
    ))?;

    Ok(InvestmentOutcome {
        principal,
        rate,
        years,
        mode,
        total,
    })
}
