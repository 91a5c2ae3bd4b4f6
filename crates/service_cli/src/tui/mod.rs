//! Interactive terminal calculator.
//!
//! Uses ratatui for rendering and crossterm for terminal handling.
//!
//! ### Screens
//! - **Calculator**: Period count, rate and cash-flow fields with NPV/FV labels
//! - **Chart**: Cash-flow timeline with present values, discount/compound factors
//! - **Schedule**: Per-period valuation table

pub mod app;
pub mod form;
pub mod screens;
pub mod state;

pub use app::TuiApp;
pub use form::{CalculatorForm, FieldKind, FormValues, InputField};
pub use state::{AppState, Dialog, Screen};
