//! Period-indexed cash-flow schedule.

use super::convention::PeriodConvention;
use super::error::ValuationError;

/// Ordered cash-flow amounts, one per period.
///
/// The position of an amount is its period index; the time at which it is
/// received is `index + convention.start_index()`.
///
/// # Invariants
///
/// - Every amount is finite
///
/// # Examples
/// ```
/// use cashflow_core::types::{CashFlowSchedule, PeriodConvention};
///
/// let schedule = CashFlowSchedule::new(vec![-500.0, 200.0, 400.0], PeriodConvention::OneBased)
///     .unwrap();
/// assert_eq!(schedule.len(), 3);
/// assert_eq!(schedule.time_of(0), 1);
/// assert_eq!(schedule.horizon(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CashFlowSchedule {
    flows: Vec<f64>,
    convention: PeriodConvention,
}

impl CashFlowSchedule {
    /// Build a schedule, rejecting NaN and infinite amounts.
    pub fn new(flows: Vec<f64>, convention: PeriodConvention) -> Result<Self, ValuationError> {
        if let Some((index, &value)) = flows.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ValuationError::NonFiniteCashFlow { index, value });
        }
        Ok(Self { flows, convention })
    }

    /// Cash-flow amounts in period order.
    #[inline]
    pub fn flows(&self) -> &[f64] {
        &self.flows
    }

    /// Indexing convention.
    #[inline]
    pub fn convention(&self) -> PeriodConvention {
        self.convention
    }

    /// Number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// True when the schedule holds no flows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Time (in periods) at which the flow at `index` is received.
    #[inline]
    pub fn time_of(&self, index: usize) -> usize {
        self.convention.period_label(index)
    }

    /// Time of the final cash flow, where FV is measured.
    ///
    /// For an empty schedule this is the convention's start index.
    pub fn horizon(&self) -> usize {
        match self.flows.len() {
            0 => self.convention.start_index(),
            n => self.time_of(n - 1),
        }
    }

    /// Iterate over `(index, time, amount)`.
    pub fn timed_flows(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.flows
            .iter()
            .enumerate()
            .map(move |(i, &cf)| (i, self.time_of(i), cf))
    }

    /// Same flows under another convention.
    pub fn with_convention(mut self, convention: PeriodConvention) -> Self {
        self.convention = convention;
        self
    }
}
