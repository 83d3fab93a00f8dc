//! # esg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Logs go to stderr so stdout carries only command output.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use esg_cli::analyze::{run_analyze, AnalyzeArgs};
use esg_cli::rules::{run_rules, RulesArgs};

/// PulseESG command-line tool
///
/// Rule-based ESG risk scoring for free-text disclosures, plus rule set
/// validation.
#[derive(Parser, Debug)]
#[command(name = "esg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a text and print the assessment as JSON.
    Analyze(AnalyzeArgs),

    /// Validate or print rule sets.
    Rules(RulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("esg CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Analyze(args) => run_analyze(&args),
        Commands::Rules(args) => run_rules(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
