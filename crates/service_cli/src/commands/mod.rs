//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod calc;
pub mod check;
pub mod tui;

use crate::{CliError, Result};
use cashflow_core::types::PeriodConvention;

/// Resolve a `--convention` flag, falling back to the configured one
pub(crate) fn resolve_convention(
    flag: Option<&str>,
    configured: PeriodConvention,
) -> Result<PeriodConvention> {
    match flag {
        Some(name) => name.parse().map_err(CliError::from),
        None => Ok(configured),
    }
}
