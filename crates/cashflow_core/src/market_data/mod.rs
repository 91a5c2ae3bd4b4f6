//! Rate term structures used for discounting.
//!
//! - [`PeriodicCurve`]: Discount and compound factors per whole period
//! - [`FlatRate`]: Constant, discretely compounded per-period rate

mod flat;
mod traits;

pub use flat::FlatRate;
pub use traits::PeriodicCurve;
