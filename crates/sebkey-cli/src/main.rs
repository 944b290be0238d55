//! # sebkey CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and dispatches to
//! the hash handler.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sebkey_cli::hash::{run_hash, HashArgs};

/// Compute the X-SafeExamBrowser-ConfigKeyHash header value for a Safe Exam
/// Browser configuration file.
///
/// Gives browsers on unsupported platforms the Config Key an SEB exam
/// endpoint expects before it serves the exam.
#[derive(Parser, Debug)]
#[command(name = "sebkey", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    hash: HashArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Verbosity maps onto the tracing filter; RUST_LOG is ignored in favor
    // of the explicit flag.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run_hash(&cli.hash) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
