//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValuationError`: Errors from discounting and compounding
//! - `InputError`: Errors from parsing user-entered text

use thiserror::Error;

/// Categorised valuation errors.
///
/// # Variants
/// - `InvalidRate`: Rate at or below -100%, or not finite
/// - `NonFiniteCashFlow`: A cash-flow amount is NaN or infinite
/// - `NonFiniteResult`: A computed value overflowed
///
/// # Examples
/// ```
/// use cashflow_core::types::ValuationError;
///
/// let err = ValuationError::InvalidRate { rate: -1.0 };
/// assert_eq!(format!("{}", err), "Invalid rate: -1 (must be greater than -1)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// Rate for which `1 + r` is not a positive finite number.
    #[error("Invalid rate: {rate} (must be greater than -1)")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Cash-flow amount that is NaN or infinite.
    #[error("Cash flow at index {index} is not finite: {value}")]
    NonFiniteCashFlow {
        /// Position in the schedule
        index: usize,
        /// The rejected amount
        value: f64,
    },

    /// Computation produced NaN or infinity.
    #[error("Non-finite result: {0}")]
    NonFiniteResult(String),
}

/// Errors raised while turning raw field text into numbers.
///
/// Every variant is a flavour of "invalid or non-numeric input"; the message is
/// what the user sees in the error dialog.
///
/// # Examples
/// ```
/// use cashflow_core::types::InputError;
///
/// let err = InputError::InvalidCashFlow { period: 2, input: "abc".to_string() };
/// assert_eq!(format!("{}", err), "Cash flow for period 2 is not a number: 'abc'");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Period count is not a whole number.
    #[error("Number of periods is not a whole number: '{0}'")]
    InvalidPeriodCount(String),

    /// Period count outside `1..=max`.
    #[error("Number of periods must be between 1 and {max}, got {count}")]
    PeriodCountOutOfRange {
        /// The parsed count
        count: i64,
        /// Largest accepted count
        max: usize,
    },

    /// Rate is not a number or is at or below -100%.
    #[error("Interest rate is not valid: '{0}'")]
    InvalidRate(String),

    /// Cash-flow text is not a finite number.
    #[error("Cash flow for period {period} is not a number: '{input}'")]
    InvalidCashFlow {
        /// Period label under the active convention
        period: usize,
        /// The raw text
        input: String,
    },

    /// Unknown period convention name.
    #[error("Unknown period convention: '{0}' (expected zero or one)")]
    InvalidConvention(String),

    /// A required field was left blank.
    #[error("{0} is empty")]
    EmptyField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rate_display() {
        let err = ValuationError::InvalidRate { rate: -2.5 };
        assert!(err.to_string().contains("-2.5"));
    }

    #[test]
    fn test_non_finite_cash_flow_display() {
        let err = ValuationError::NonFiniteCashFlow {
            index: 3,
            value: f64::NAN,
        };
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_period_count_out_of_range_display() {
        let err = InputError::PeriodCountOutOfRange { count: 0, max: 120 };
        assert_eq!(
            err.to_string(),
            "Number of periods must be between 1 and 120, got 0"
        );
    }

    #[test]
    fn test_empty_field_display() {
        let err = InputError::EmptyField("Interest rate".to_string());
        assert_eq!(err.to_string(), "Interest rate is empty");
    }
}
