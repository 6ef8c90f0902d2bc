use anyhow::Result;
use clap::{Parser, Subcommand};
use fincalc::core::log::init_logging;
use std::io;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate investment growth with simple or compound interest
    Investment,
    /// Calculate the monthly repayment on a home loan
    Bond,
}

impl From<Commands> for fincalc::AppCommand {
    fn from(cmd: Commands) -> fincalc::AppCommand {
        match cmd {
            Commands::Investment => fincalc::AppCommand::Investment,
            Commands::Bond => fincalc::AppCommand::Bond,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let command = cli
        .command
        .map_or(fincalc::AppCommand::Menu, fincalc::AppCommand::from);
    let result = fincalc::run_command(command, io::stdin().lock(), io::stdout().lock());

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
