//! Billboard CLI - Command-line interface
//!
//! Provides command-line access to Billboard functionality.

mod commands;

use billboard_core::tracing_setup::{CliLogLevel, init_tracing};
use clap::Parser;

#[derive(Parser)]
#[command(name = "billboard")]
#[command(about = "Search-backed event content blocks")]
struct Cli {
    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level());

    commands::handle_command(cli.command).await
}
