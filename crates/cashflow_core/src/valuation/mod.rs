//! Net present value, future value and per-period valuation.
//!
//! For a schedule of `n` flows `cf[t]`, rate `r` and start index `s`
//! (0 for zero-based, 1 for one-based):
//!
//! ```text
//! NPV = Σ cf[t] / (1+r)^(t+s)
//! FV  = Σ cf[t] * (1+r)^(H-(t+s)),   H = n-1+s (time of the final flow)
//! ```
//!
//! so that `FV = NPV * (1+r)^H` for every convention. [`fv_at`] compounds to
//! any other horizon.

mod report;

pub use report::{PeriodValuation, ValuationReport};

use crate::market_data::{FlatRate, PeriodicCurve};
use crate::types::{CashFlowSchedule, PeriodConvention, ValuationError};
use tracing::debug;

/// Net present value of `flows` at per-period `rate`.
///
/// # Example
///
/// ```
/// use cashflow_core::types::PeriodConvention;
/// use cashflow_core::valuation::npv;
///
/// let v = npv(&[100.0, 100.0, 100.0], 0.1, PeriodConvention::OneBased).unwrap();
/// assert!((v - 248.685).abs() < 1e-3);
/// ```
pub fn npv(flows: &[f64], rate: f64, convention: PeriodConvention) -> Result<f64, ValuationError> {
    let schedule = CashFlowSchedule::new(flows.to_vec(), convention)?;
    npv_on(&schedule, &FlatRate::new(rate)?)
}

/// Future value of `flows`, measured at the time of the final flow.
///
/// # Example
///
/// ```
/// use cashflow_core::types::PeriodConvention;
/// use cashflow_core::valuation::fv;
///
/// let v = fv(&[100.0, 100.0, 100.0], 0.1, PeriodConvention::ZeroBased).unwrap();
/// assert!((v - 331.0).abs() < 1e-9);
/// ```
pub fn fv(flows: &[f64], rate: f64, convention: PeriodConvention) -> Result<f64, ValuationError> {
    let schedule = CashFlowSchedule::new(flows.to_vec(), convention)?;
    fv_at_on(&schedule, &FlatRate::new(rate)?, schedule.horizon())
}

/// Future value of `flows` compounded to `horizon`.
///
/// Flows falling after the horizon are discounted back to it.
pub fn fv_at(
    flows: &[f64],
    rate: f64,
    convention: PeriodConvention,
    horizon: usize,
) -> Result<f64, ValuationError> {
    let schedule = CashFlowSchedule::new(flows.to_vec(), convention)?;
    fv_at_on(&schedule, &FlatRate::new(rate)?, horizon)
}

/// Present value of the single flow at `index`, or `None` past the end.
pub fn present_value(
    flows: &[f64],
    rate: f64,
    convention: PeriodConvention,
    index: usize,
) -> Result<Option<f64>, ValuationError> {
    let curve = FlatRate::new(rate)?;
    let Some(&cf) = flows.get(index) else {
        return Ok(None);
    };
    let t = exponent(convention.period_label(index))?;
    finite(cf * curve.discount_factor(t), "present value").map(Some)
}

/// NPV of a schedule on an arbitrary curve.
pub fn npv_on<C: PeriodicCurve<f64>>(
    schedule: &CashFlowSchedule,
    curve: &C,
) -> Result<f64, ValuationError> {
    let mut total = 0.0;
    for (_, time, cf) in schedule.timed_flows() {
        total += cf * curve.discount_factor(exponent(time)?);
    }
    finite(total, "NPV")
}

/// FV of a schedule at `horizon` on an arbitrary curve.
pub fn fv_at_on<C: PeriodicCurve<f64>>(
    schedule: &CashFlowSchedule,
    curve: &C,
    horizon: usize,
) -> Result<f64, ValuationError> {
    let horizon = exponent(horizon)?;
    let mut total = 0.0;
    for (_, time, cf) in schedule.timed_flows() {
        total += cf * curve.compound_factor(horizon - exponent(time)?);
    }
    finite(total, "FV")
}

/// Value every period of `schedule` at `rate` and collect NPV and FV.
///
/// # Errors
///
/// - `ValuationError::InvalidRate` if `rate <= -1` or is not finite
/// - `ValuationError::NonFiniteResult` if any value overflows
pub fn value_schedule(
    schedule: &CashFlowSchedule,
    rate: f64,
) -> Result<ValuationReport, ValuationError> {
    let curve = FlatRate::new(rate)?;
    let horizon = schedule.horizon();
    let h = exponent(horizon)?;

    debug!(
        periods = schedule.len(),
        rate,
        convention = %schedule.convention(),
        horizon,
        "valuing cash-flow schedule"
    );

    let mut periods = Vec::with_capacity(schedule.len());
    for (index, time, cash_flow) in schedule.timed_flows() {
        let t = exponent(time)?;
        let discount_factor = curve.discount_factor(t);
        let compound_factor = curve.compound_factor(t);
        let present_value = finite(cash_flow * discount_factor, "present value")?;
        let future_value = finite(cash_flow * curve.compound_factor(h - t), "future value")?;

        periods.push(PeriodValuation {
            index,
            time,
            cash_flow,
            discount_factor: finite(discount_factor, "discount factor")?,
            present_value,
            compound_factor: finite(compound_factor, "compound factor")?,
            future_value,
        });
    }

    let npv = finite(
        periods.iter().fold(0.0, |acc, p| acc + p.present_value),
        "NPV",
    )?;
    let fv = finite(
        periods.iter().fold(0.0, |acc, p| acc + p.future_value),
        "FV",
    )?;

    Ok(ValuationReport {
        rate,
        convention: schedule.convention(),
        horizon,
        npv,
        fv,
        periods,
    })
}

fn exponent(time: usize) -> Result<i32, ValuationError> {
    i32::try_from(time)
        .map_err(|_| ValuationError::NonFiniteResult(format!("period {time} is out of range")))
}

fn finite(value: f64, what: &str) -> Result<f64, ValuationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValuationError::NonFiniteResult(format!(
            "{what} evaluated to {value}"
        )))
    }
}
