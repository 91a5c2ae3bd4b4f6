//! Parsing of raw user input.
//!
//! Every field of the calculator form arrives as text. These functions turn
//! that text into validated numbers or an [`InputError`] whose message is
//! shown to the user verbatim.

use crate::math::growth_base;
use crate::types::{InputError, PeriodConvention};

/// Parse the number of periods, accepting `1..=max`.
///
/// # Example
///
/// ```
/// use cashflow_core::input::parse_period_count;
///
/// assert_eq!(parse_period_count(" 5 ", 120).unwrap(), 5);
/// assert!(parse_period_count("0", 120).is_err());
/// assert!(parse_period_count("2.5", 120).is_err());
/// ```
pub fn parse_period_count(text: &str, max: usize) -> Result<usize, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::EmptyField("Number of periods".to_string()));
    }
    let count: i64 = text
        .parse()
        .map_err(|_| InputError::InvalidPeriodCount(text.to_string()))?;

    match usize::try_from(count) {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(InputError::PeriodCountOutOfRange { count, max }),
    }
}

/// Parse a per-period rate given as a decimal (`0.1`) or percentage (`10%`).
///
/// # Example
///
/// ```
/// use cashflow_core::input::parse_rate;
///
/// assert_eq!(parse_rate("0.1").unwrap(), 0.1);
/// assert!((parse_rate("7.5%").unwrap() - 0.075).abs() < 1e-15);
/// assert!(parse_rate("-100%").is_err());
/// ```
pub fn parse_rate(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyField("Interest rate".to_string()));
    }

    let invalid = || InputError::InvalidRate(trimmed.to_string());
    let rate = match trimmed.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().map_err(|_| invalid())? / 100.0,
        None => trimmed.parse::<f64>().map_err(|_| invalid())?,
    };

    growth_base(rate).map_err(|_| invalid())?;
    Ok(rate)
}

/// Parse one cash-flow amount.
///
/// `,` and `_` may separate thousands in the integer part (`1,000.50`,
/// `-1_000`); anywhere else they make the amount invalid.
///
/// `period` is the label shown in the error message.
pub fn parse_cash_flow(text: &str, period: usize) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyField(format!("Cash flow for period {period}")));
    }

    let invalid = || InputError::InvalidCashFlow {
        period,
        input: trimmed.to_string(),
    };
    let cleaned = strip_thousands_separators(trimmed).ok_or_else(invalid)?;
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid()),
    }
}

/// Remove `,`/`_` group separators, or `None` if they are misplaced.
fn strip_thousands_separators(text: &str) -> Option<String> {
    let is_sep = |c: char| matches!(c, ',' | '_');
    if !text.contains(is_sep) {
        return Some(text.to_string());
    }

    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let sign = &text[..text.len() - body.len()];
    let int_end = body.find(['.', 'e', 'E']).unwrap_or(body.len());
    let (int_part, rest) = body.split_at(int_end);
    if rest.contains(is_sep) {
        return None;
    }

    let all_digits = |g: &str| g.bytes().all(|b| b.is_ascii_digit());
    let groups: Vec<&str> = int_part.split(is_sep).collect();
    let (&first, tail) = groups.split_first()?;
    let first_ok = (1..=3).contains(&first.len()) && all_digits(first);
    if !first_ok || !tail.iter().all(|&g| g.len() == 3 && all_digits(g)) {
        return None;
    }

    let digits: String = int_part.chars().filter(|&c| !is_sep(c)).collect();
    Some(format!("{sign}{digits}{rest}"))
}

/// Parse every cash-flow field, failing on the first bad one.
///
/// Period labels in errors follow `convention`.
pub fn parse_cash_flows<S: AsRef<str>>(
    texts: &[S],
    convention: PeriodConvention,
) -> Result<Vec<f64>, InputError> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| parse_cash_flow(text.as_ref(), convention.period_label(i)))
        .collect()
}

/// Parse a comma- or whitespace-separated list such as `-500, 200 300`.
///
/// Digit separators are not supported here since `,` delimits entries.
pub fn parse_cash_flow_list(
    text: &str,
    convention: PeriodConvention,
) -> Result<Vec<f64>, InputError> {
    let entries: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if entries.is_empty() {
        return Err(InputError::EmptyField("Cash flows".to_string()));
    }
    parse_cash_flows(&entries, convention)
}
