//! Line-based prompts that keep asking until the answer is usable.

use super::ui::{self, StyleType};
use crate::core::InterestMode;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Why a line of input could not be used.
///
/// Everything except `Closed` and `Io` is recovered by re-prompting.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid input. Please enter numeric value.")]
    NotANumber,
    #[error("Please enter a greater number than zero.")]
    NotPositive,
    #[error("Please enter interest rate greater than zero.")]
    RateNotPositive,
    #[error("Do not include the '%' symbol.\nEnter numbers only (i.e. 8 for 8%).")]
    PercentSymbol,
    #[error("Invalid choice. Please enter 'simple' or 'compound'.")]
    UnknownInterestMode,
    #[error("Input stream closed")]
    Closed,
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// True for the errors that a fresh line of input can fix.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InputError::Closed | InputError::Io(_))
    }
}

/// Drops `_` digit separators (`1_000`), keeping any other underscore so the
/// parse fails.
fn strip_digit_separators(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
            c != '_' || !between_digits
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Parses a strictly positive, finite number.
pub fn parse_positive(text: &str) -> Result<f64, InputError> {
    let value: f64 = strip_digit_separators(text.trim())
        .parse()
        .map_err(|_| InputError::NotANumber)?;
    if !value.is_finite() {
        return Err(InputError::NotANumber);
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive);
    }
    Ok(value)
}

/// Parses an interest rate typed as a bare percentage, e.g. `8` for 8%.
pub fn parse_rate(text: &str) -> Result<f64, InputError> {
    let text = text.trim();
    if text.contains('%') {
        return Err(InputError::PercentSymbol);
    }
    parse_positive(text).map_err(|e| match e {
        InputError::NotPositive => InputError::RateNotPositive,
        other => other,
    })
}

/// Parses the interest mode answer.
pub fn parse_interest_mode(text: &str) -> Result<InterestMode, InputError> {
    text.parse().map_err(|_| InputError::UnknownInterestMode)
}

/// Owns the input and output streams of one interactive session.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives the output stream back, mostly so tests can inspect it.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: &str) -> Result<(), InputError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one line, without its line ending.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Re-prompts until `parse` accepts a line. Only unrecoverable errors escape.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, InputError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    debug!(input = %line, reason = ?e, "Rejected input");
                    for message in e.to_string().lines() {
                        self.say(&ui::style_text(message, StyleType::Error))?;
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn positive_number(&mut self, prompt: &str) -> Result<f64, InputError> {
        self.ask(prompt, parse_positive)
    }

    pub fn interest_rate(&mut self, prompt: &str) -> Result<f64, InputError> {
        self.ask(prompt, parse_rate)
    }

    pub fn interest_mode(&mut self, prompt: &str) -> Result<InterestMode, InputError> {
        self.ask(prompt, parse_interest_mode)
    }
}
