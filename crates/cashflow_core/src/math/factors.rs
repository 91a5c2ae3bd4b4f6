//! Discrete compounding factors.
//!
//! All functions are generic over `T: Float` so they work with `f32`, `f64`
//! and any other `num_traits::Float` implementor.

use crate::types::ValuationError;
use num_traits::Float;

/// Validate a per-period rate and return the growth base `1 + r`.
///
/// # Errors
///
/// `ValuationError::InvalidRate` when `r` is not finite or `1 + r <= 0`.
///
/// # Example
///
/// ```
/// use cashflow_core::math::growth_base;
///
/// assert!((growth_base(0.1_f64).unwrap() - 1.1).abs() < 1e-12);
/// assert!(growth_base(-1.0_f64).is_err());
/// ```
pub fn growth_base<T: Float>(rate: T) -> Result<T, ValuationError> {
    let base = T::one() + rate;
    if !rate.is_finite() || base <= T::zero() {
        return Err(ValuationError::InvalidRate {
            rate: rate.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(base)
}

/// Discount factor `1 / (1+r)^t`.
///
/// Negative `t` compounds instead of discounting.
///
/// ```text
/// DF(r, t) = (1 + r)^(-t)
/// ```
#[inline]
pub fn discount_factor<T: Float>(rate: T, periods: i32) -> T {
    (T::one() + rate).powi(-periods)
}

/// Compound factor `(1+r)^t`.
#[inline]
pub fn compound_factor<T: Float>(rate: T, periods: i32) -> T {
    (T::one() + rate).powi(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_at_zero() {
        assert_eq!(discount_factor(0.1_f64, 0), 1.0);
    }

    #[test]
    fn test_discount_factor_values() {
        assert_relative_eq!(discount_factor(0.1_f64, 1), 1.0 / 1.1, epsilon = 1e-12);
        assert_relative_eq!(discount_factor(0.1_f64, 3), 1.0 / 1.331, epsilon = 1e-12);
    }

    #[test]
    fn test_compound_factor_values() {
        assert_relative_eq!(compound_factor(0.1_f64, 2), 1.21, epsilon = 1e-12);
        assert_relative_eq!(compound_factor(0.05_f64, 0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_factors_are_reciprocal() {
        for t in 0..20 {
            let product = discount_factor(0.07_f64, t) * compound_factor(0.07_f64, t);
            assert_relative_eq!(product, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_periods_compound() {
        assert_relative_eq!(discount_factor(0.1_f64, -1), 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_f32_support() {
        assert!((discount_factor(0.1_f32, 1) - 0.909_090_9).abs() < 1e-6);
    }

    #[test]
    fn test_growth_base_accepts_negative_rate_above_minus_one() {
        assert_relative_eq!(growth_base(-0.5_f64).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_growth_base_rejects() {
        assert!(growth_base(-1.0_f64).is_err());
        assert!(growth_base(-3.0_f64).is_err());
        assert!(growth_base(f64::NAN).is_err());
        assert!(growth_base(f64::INFINITY).is_err());
    }
}
