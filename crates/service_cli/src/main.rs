//! npv-calc - NPV and FV calculator
//!
//! # Commands
//!
//! - `npv-calc` / `npv-calc tui` - Interactive calculator with charts
//! - `npv-calc calc --rate <r> --flows <list>` - Print a valuation
//! - `npv-calc check` - Validate the configuration

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use service_cli::commands::{self, calc::CalcArgs, tui::TuiArgs};
use service_cli::prelude::{CalcConfig, DEFAULT_CONFIG_FILE};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// NPV and FV calculator for periodic cash flows
#[derive(Parser)]
#[command(name = "npv-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive calculator (default)
    Tui(TuiArgs),

    /// Value a list of cash flows and print the result
    Calc(CalcArgs),

    /// Check the configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Tui(TuiArgs::default())) {
        Commands::Tui(args) => {
            let config = load_config(&cli.config)?;
            // Tracing to the terminal would corrupt the TUI, so only log to a file
            if let Some(path) = config.log_file.as_deref() {
                init_tracing(cli.verbose, &config.log_level, Some(path))?;
            }
            commands::tui::run(&args, &config)?;
        }
        Commands::Calc(args) => {
            let config = load_config(&cli.config)?;
            init_tracing(cli.verbose, &config.log_level, None)?;
            if cli.verbose {
                info!("Verbose mode enabled");
            }
            commands::calc::run(&args, &config)?;
        }
        Commands::Check => {
            init_tracing(cli.verbose, "info", None)?;
            commands::check::run(&cli.config)?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<CalcConfig> {
    CalcConfig::load_with_env_and_validate(path)
        .with_context(|| format!("loading {}", path.display()))
}

/// Initialise tracing to stderr, or to `log_file` when given
fn init_tracing(verbose: bool, level: &str, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }

    Ok(())
}
