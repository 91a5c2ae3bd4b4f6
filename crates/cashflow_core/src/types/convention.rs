//! Period indexing conventions.

use std::fmt;
use std::str::FromStr;

use super::error::InputError;

/// Where the first cash flow of a schedule sits on the time axis.
///
/// With `ZeroBased` the first flow is received today (t=0) and is not
/// discounted; with `OneBased` every flow arrives at the end of its period.
///
/// # Examples
/// ```
/// use cashflow_core::types::PeriodConvention;
///
/// assert_eq!(PeriodConvention::ZeroBased.start_index(), 0);
/// assert_eq!(PeriodConvention::OneBased.start_index(), 1);
/// assert_eq!("one".parse::<PeriodConvention>().unwrap(), PeriodConvention::OneBased);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PeriodConvention {
    /// First flow at t=0
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "zero", alias = "zero-based"))]
    ZeroBased,
    /// First flow at t=1
    #[cfg_attr(feature = "serde", serde(rename = "one", alias = "one-based"))]
    OneBased,
}

impl PeriodConvention {
    /// Time of the first cash flow.
    #[inline]
    pub fn start_index(&self) -> usize {
        match self {
            Self::ZeroBased => 0,
            Self::OneBased => 1,
        }
    }

    /// Short human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ZeroBased => "0-based",
            Self::OneBased => "1-based",
        }
    }

    /// The other convention.
    pub fn toggled(&self) -> Self {
        match self {
            Self::ZeroBased => Self::OneBased,
            Self::OneBased => Self::ZeroBased,
        }
    }

    /// Period label shown next to the cash flow at `index`.
    #[inline]
    pub fn period_label(&self, index: usize) -> usize {
        index + self.start_index()
    }
}

impl fmt::Display for PeriodConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PeriodConvention {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "zero" | "zero-based" | "0-based" => Ok(Self::ZeroBased),
            "1" | "one" | "one-based" | "1-based" => Ok(Self::OneBased),
            other => Err(InputError::InvalidConvention(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_based() {
        assert_eq!(PeriodConvention::default(), PeriodConvention::ZeroBased);
    }

    #[test]
    fn test_toggled_round_trip() {
        let c = PeriodConvention::ZeroBased;
        assert_eq!(c.toggled(), PeriodConvention::OneBased);
        assert_eq!(c.toggled().toggled(), c);
    }

    #[test]
    fn test_period_label() {
        assert_eq!(PeriodConvention::ZeroBased.period_label(0), 0);
        assert_eq!(PeriodConvention::OneBased.period_label(0), 1);
        assert_eq!(PeriodConvention::OneBased.period_label(4), 5);
    }

    #[test]
    fn test_from_str_variants() {
        for s in ["0", "zero", "Zero-Based", " 0-based "] {
            assert_eq!(s.parse::<PeriodConvention>().unwrap(), PeriodConvention::ZeroBased);
        }
        for s in ["1", "ONE", "one-based", "1-based"] {
            assert_eq!(s.parse::<PeriodConvention>().unwrap(), PeriodConvention::OneBased);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "two".parse::<PeriodConvention>().unwrap_err();
        assert_eq!(err, InputError::InvalidConvention("two".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(PeriodConvention::OneBased.to_string(), "1-based");
    }
}
