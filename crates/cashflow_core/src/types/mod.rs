//! Cash-flow schedule, period convention and error types.
//!
//! This module provides:
//! - `convention`: Whether the first cash flow falls at t=0 or t=1
//! - `schedule`: Ordered, period-indexed cash-flow amounts
//! - `error`: Structured error types for valuation and input parsing
//!
//! # Re-exports
//!
//! - [`PeriodConvention`] from `convention`
//! - [`CashFlowSchedule`] from `schedule`
//! - [`ValuationError`], [`InputError`] from `error`

pub mod convention;
pub mod error;
pub mod schedule;

pub use convention::PeriodConvention;
pub use error::{InputError, ValuationError};
pub use schedule::CashFlowSchedule;
