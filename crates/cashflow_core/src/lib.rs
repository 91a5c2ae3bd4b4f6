//! # cashflow_core: Valuation Kernel for Periodic Cash Flows
//!
//! ## Core Layer Role
//!
//! cashflow_core is the bottom layer of the calculator, providing:
//! - Period conventions and cash-flow schedules (`types`)
//! - Discount and compound factors generic over `Float` (`math::factors`)
//! - A flat, discretely compounded per-period rate (`market_data`)
//! - NPV, FV and per-period valuation reports (`valuation`)
//! - Parsing of raw form/command-line text into validated inputs (`input`)
//!
//! ## Zero UI Principle
//!
//! This crate has no terminal, CLI or configuration dependencies. The service
//! layer (`service_cli`) owns all presentation concerns.
//!
//! ## Usage Examples
//!
//! ```rust
//! use cashflow_core::types::{CashFlowSchedule, PeriodConvention};
//! use cashflow_core::valuation::value_schedule;
//!
//! let schedule =
//!     CashFlowSchedule::new(vec![100.0, 100.0, 100.0], PeriodConvention::OneBased).unwrap();
//! let report = value_schedule(&schedule, 0.1).unwrap();
//!
//! assert!((report.npv - 248.685).abs() < 1e-3);
//! assert!((report.fv - 331.0).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for conventions, schedules and reports

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod input;
pub mod market_data;
pub mod math;
pub mod types;
pub mod valuation;
