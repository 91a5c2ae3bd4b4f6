//! Check command implementation
//!
//! Loads and validates the configuration, then reports the effective values.

use std::path::Path;

use tracing::info;

use crate::config::CalcConfig;
use crate::Result;

/// Run the check command
pub fn run(config_path: &Path) -> Result<()> {
    info!("Checking configuration...");

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    let config = CalcConfig::load_with_env_and_validate(config_path)?;

    println!("Configuration OK ({})", source);
    println!("  convention:      {}", config.convention);
    println!("  default_periods: {}", config.default_periods);
    println!("  default_rate:    {}", config.default_rate);
    println!("  max_periods:     {}", config.max_periods);
    println!("  decimals:        {}", config.decimals);
    println!("  log_level:       {}", config.log_level);
    match &config.log_file {
        Some(path) => println!("  log_file:        {}", path.display()),
        None => println!("  log_file:        (TUI logging disabled)"),
    }

    info!("Configuration check complete");
    Ok(())
}
