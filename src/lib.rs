pub mod cli;
pub mod core;

use crate::cli::Prompter;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

/// Entry points a session can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Interactive menu offering every calculator.
    Menu,
    /// A single investment calculation.
    Investment,
    /// A single bond repayment calculation.
    Bond,
}

/// Runs `command` against the given input and output streams.
pub fn run_command<R: BufRead, W: Write>(command: AppCommand, input: R, output: W) -> Result<()> {
    info!(?command, "Financial calculator starting...");
    let mut prompter = Prompter::new(input, output);

    match command {
        AppCommand::Menu => cli::menu::run(&mut prompter),
        AppCommand::Investment => cli::investment::run(&mut prompter).map(|_| ()),
        AppCommand::Bond => cli::bond::run(&mut prompter).map(|_| ()),
    }
}
