//! Flat per-period rate.

use super::PeriodicCurve;
use crate::math::factors::{compound_factor, discount_factor, growth_base};
use crate::types::ValuationError;
use num_traits::Float;

/// Constant rate compounded once per period.
///
/// # Example
///
/// ```
/// use cashflow_core::market_data::{FlatRate, PeriodicCurve};
///
/// let curve = FlatRate::new(0.05_f64).unwrap();
/// assert_eq!(curve.rate(), 0.05);
/// assert!(FlatRate::new(-1.5_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRate<T: Float> {
    rate: T,
}

impl<T: Float> FlatRate<T> {
    /// Construct a flat curve.
    ///
    /// # Errors
    ///
    /// `ValuationError::InvalidRate` if `rate <= -1` or is not finite.
    pub fn new(rate: T) -> Result<Self, ValuationError> {
        growth_base(rate)?;
        Ok(Self { rate })
    }
}

impl<T: Float> PeriodicCurve<T> for FlatRate<T> {
    #[inline]
    fn rate(&self) -> T {
        self.rate
    }

    #[inline]
    fn discount_factor(&self, periods: i32) -> T {
        discount_factor(self.rate, periods)
    }

    #[inline]
    fn compound_factor(&self, periods: i32) -> T {
        compound_factor(self.rate, periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_zero_rate() {
        let curve = FlatRate::new(0.0_f64).unwrap();
        for t in 0..5 {
            assert_eq!(curve.discount_factor(t), 1.0);
        }
    }

    #[test]
    fn test_new_negative_rate() {
        // Negative rates above -100% are valid
        let curve = FlatRate::new(-0.02_f64).unwrap();
        assert!(curve.discount_factor(1) > 1.0);
    }

    #[test]
    fn test_new_rejects_total_loss_rate() {
        assert_eq!(
            FlatRate::new(-1.0_f64).unwrap_err(),
            ValuationError::InvalidRate { rate: -1.0 }
        );
    }

    #[test]
    fn test_discount_factor_monotonic() {
        let curve = FlatRate::new(0.08_f64).unwrap();
        for t in 0..30 {
            assert!(curve.discount_factor(t) > curve.discount_factor(t + 1));
        }
    }

    #[test]
    fn test_default_compound_factor_agrees() {
        struct Reciprocal(FlatRate<f64>);
        impl PeriodicCurve<f64> for Reciprocal {
            fn rate(&self) -> f64 {
                self.0.rate()
            }
            fn discount_factor(&self, periods: i32) -> f64 {
                self.0.discount_factor(periods)
            }
        }

        let flat = FlatRate::new(0.1_f64).unwrap();
        let wrapped = Reciprocal(flat);
        for t in 0..10 {
            assert_relative_eq!(
                wrapped.compound_factor(t),
                flat.compound_factor(t),
                epsilon = 1e-10
            );
        }
    }
}
