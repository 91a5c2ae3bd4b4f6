//! Periodic curve trait definition.

use num_traits::Float;

/// Discounting curve indexed by whole periods.
///
/// # Invariants
///
/// - `discount_factor(0) == 1`
/// - `discount_factor(t) > 0` for all t
/// - `compound_factor(t) * discount_factor(t) == 1`
///
/// # Example
///
/// ```
/// use cashflow_core::market_data::{FlatRate, PeriodicCurve};
///
/// let curve = FlatRate::new(0.1_f64).unwrap();
/// assert!((curve.discount_factor(1) - 1.0 / 1.1).abs() < 1e-12);
/// assert!((curve.compound_factor(2) - 1.21).abs() < 1e-12);
/// ```
pub trait PeriodicCurve<T: Float> {
    /// Per-period rate used by the curve.
    fn rate(&self) -> T;

    /// Present value of one unit received after `periods` periods.
    fn discount_factor(&self, periods: i32) -> T;

    /// Value after `periods` periods of one unit invested today.
    fn compound_factor(&self, periods: i32) -> T {
        T::one() / self.discount_factor(periods)
    }
}
