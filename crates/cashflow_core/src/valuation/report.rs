//! Valuation report types.

use crate::math::factors::compound_factor;
use crate::types::PeriodConvention;

/// Valuation of a single period.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PeriodValuation {
    /// Position in the schedule
    pub index: usize,
    /// Time at which the flow is received
    pub time: usize,
    /// Undiscounted amount
    pub cash_flow: f64,
    /// `1/(1+r)^time`
    pub discount_factor: f64,
    /// Cash flow discounted to t=0
    pub present_value: f64,
    /// `(1+r)^time`
    pub compound_factor: f64,
    /// Cash flow compounded to the report horizon
    pub future_value: f64,
}

/// Result of valuing a whole schedule at one rate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValuationReport {
    /// Per-period rate
    pub rate: f64,
    /// Indexing convention of the schedule
    pub convention: PeriodConvention,
    /// Period at which `fv` is measured
    pub horizon: usize,
    /// Net present value
    pub npv: f64,
    /// Future value at `horizon`
    pub fv: f64,
    /// Per-period breakdown in schedule order
    pub periods: Vec<PeriodValuation>,
}

impl ValuationReport {
    /// NPV carried forward to the horizon, `npv * (1+r)^horizon`.
    ///
    /// Agrees with `fv` up to rounding.
    pub fn fv_from_npv(&self) -> f64 {
        let h = i32::try_from(self.horizon).unwrap_or(i32::MAX);
        self.npv * compound_factor(self.rate, h)
    }

    /// Cash flows as `(time, amount)` chart points.
    pub fn cash_flow_points(&self) -> Vec<(f64, f64)> {
        self.points(|p| p.cash_flow)
    }

    /// Present values as `(time, value)` chart points.
    pub fn present_value_points(&self) -> Vec<(f64, f64)> {
        self.points(|p| p.present_value)
    }

    /// Discount factors as `(time, factor)` chart points.
    pub fn discount_factor_points(&self) -> Vec<(f64, f64)> {
        self.points(|p| p.discount_factor)
    }

    /// Compound factors as `(time, factor)` chart points.
    pub fn compound_factor_points(&self) -> Vec<(f64, f64)> {
        self.points(|p| p.compound_factor)
    }

    fn points(&self, value: impl Fn(&PeriodValuation) -> f64) -> Vec<(f64, f64)> {
        self.periods
            .iter()
            .map(|p| (p.time as f64, value(p)))
            .collect()
    }
}
