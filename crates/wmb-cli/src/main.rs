//! # wmb CLI entry point
//!
//! Parses command-line arguments, initializes tracing from the verbosity
//! flags, loads the badge store, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wmb_cli::alerts::{run_alerts, run_list, run_show, ShowArgs};
use wmb_cli::badge::{run_add, AddArgs};
use wmb_cli::escalate::{run_clear, run_escalate, ClearArgs, EscalateArgs};
use wmb_cli::report::run_report;
use wmb_store::BadgeStore;

/// WMB Stack CLI — water-meter badge toolchain.
///
/// Validates new badge records against the field rules, derives alert
/// status messages, escalates alerts into service requests, and manages
/// the JSON-backed record store.
#[derive(Parser, Debug)]
#[command(name = "wmb", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the badge store file.
    #[arg(long, global = true, default_value = "badges.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the derived alert message for every badge.
    Alerts,

    /// Print a summary report of the store.
    Report,

    /// Validate and add a new badge record.
    Add(AddArgs),

    /// Create a service request for a badge with an active alert.
    Escalate(EscalateArgs),

    /// Clear a badge's alert.
    Clear(ClearArgs),

    /// Show one badge's assessment and fields.
    Show(ShowArgs),

    /// List all badges with their lifecycle state.
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
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

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let mut store = BadgeStore::load(&cli.data)
        .with_context(|| format!("failed to load badge store from {}", cli.data.display()))?;

    tracing::debug!(path = %cli.data.display(), count = store.len(), "badge store ready");

    match cli.command {
        Commands::Alerts => run_alerts(&store),
        Commands::Report => run_report(&store),
        Commands::Add(args) => run_add(&args, &mut store),
        Commands::Escalate(args) => run_escalate(&args, &mut store),
        Commands::Clear(args) => run_clear(&args, &mut store),
        Commands::Show(args) => run_show(&args, &store),
        Commands::List => run_list(&store),
    }
}
