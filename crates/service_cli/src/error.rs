//! Error types for the npv-calc service.

use cashflow_core::types::{InputError, ValuationError};
use thiserror::Error;

/// Service error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Invalid or non-numeric user input
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Valuation failure
    #[error("Valuation error: {0}")]
    Valuation(#[from] ValuationError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for service operations
pub type Result<T> = std::result::Result<T, CliError>;
