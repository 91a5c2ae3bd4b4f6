//! # npv-calc
//!
//! Terminal calculator for the net present value and future value of a
//! series of periodic cash flows.
//!
//! ## TUI Mode
//! Form inputs for the period count, rate and one field per cash flow, NPV and
//! FV labels, and a chart of the cash-flow timeline with per-period
//! discount/compound factors. See [`tui`].
//!
//! ## Batch Mode
//! `npv-calc calc --rate 0.1 --flows 100,100,100` prints the valuation as a
//! table, JSON or CSV. See [`commands::calc`].

pub mod commands;
pub mod config;
pub mod error;
pub mod tui;

pub use error::{CliError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, ConfigError, DEFAULT_CONFIG_FILE};
    pub use crate::error::{CliError, Result};
    pub use crate::tui::{AppState, Screen, TuiApp};
}
