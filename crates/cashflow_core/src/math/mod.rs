//! Closed-form discounting and compounding.
//!
//! - `factors`: Discount factor `1/(1+r)^t` and compound factor `(1+r)^t`

pub mod factors;

pub use factors::{compound_factor, discount_factor, growth_base};
