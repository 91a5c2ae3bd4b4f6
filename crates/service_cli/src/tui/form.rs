//! Calculator input form.
//!
//! Holds the raw text of every field. Nothing is parsed until the user sets
//! the period count or asks for a calculation.

use cashflow_core::input::{parse_cash_flows, parse_period_count, parse_rate};
use cashflow_core::types::{InputError, PeriodConvention};

/// A single editable text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    /// Label shown left of the field
    pub label: String,
    /// Raw text entered so far
    pub value: String,
}

impl InputField {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Which field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Number of periods
    Periods,
    /// Interest rate
    Rate,
    /// Cash flow at the given schedule index
    CashFlow(usize),
}

/// Parsed form contents
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    /// Per-period rate
    pub rate: f64,
    /// Cash flows in period order
    pub flows: Vec<f64>,
}

/// The calculator form: period count, rate and one field per cash flow
#[derive(Debug, Clone)]
pub struct CalculatorForm {
    periods: InputField,
    rate: InputField,
    cash_flows: Vec<InputField>,
    focus: usize,
    convention: PeriodConvention,
}

impl CalculatorForm {
    /// Create a form with `periods` empty cash-flow fields
    pub fn new(periods: usize, rate: impl Into<String>, convention: PeriodConvention) -> Self {
        let mut form = Self {
            periods: InputField::new("Number of Periods", periods.to_string()),
            rate: InputField::new("Interest Rate (as decimal)", rate),
            cash_flows: Vec::new(),
            focus: 0,
            convention,
        };
        form.resize_cash_flows(periods);
        form
    }

    /// Fill the cash-flow fields from known amounts, resizing to match
    pub fn prefill_cash_flows(&mut self, flows: &[f64]) {
        self.periods.value = flows.len().to_string();
        self.resize_cash_flows(flows.len());
        for (field, cf) in self.cash_flows.iter_mut().zip(flows) {
            field.value = cf.to_string();
        }
    }

    /// Period count field
    pub fn periods_field(&self) -> &InputField {
        &self.periods
    }

    /// Rate field
    pub fn rate_field(&self) -> &InputField {
        &self.rate
    }

    /// Cash-flow fields in period order
    pub fn cash_flow_fields(&self) -> &[InputField] {
        &self.cash_flows
    }

    /// Active period convention
    pub fn convention(&self) -> PeriodConvention {
        self.convention
    }

    /// Switch convention and relabel the cash-flow fields
    pub fn set_convention(&mut self, convention: PeriodConvention) {
        self.convention = convention;
        for (i, field) in self.cash_flows.iter_mut().enumerate() {
            field.label = cash_flow_label(convention, i);
        }
    }

    /// Total number of fields
    pub fn field_count(&self) -> usize {
        2 + self.cash_flows.len()
    }

    /// Index of the focused field in display order
    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// The focused field
    pub fn focused(&self) -> FieldKind {
        match self.focus {
            0 => FieldKind::Periods,
            1 => FieldKind::Rate,
            n => FieldKind::CashFlow(n - 2),
        }
    }

    /// Move focus to the next field, wrapping
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
    }

    /// Move focus to the previous field, wrapping
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.field_count() - 1) % self.field_count();
    }

    /// Append a character to the focused field
    pub fn insert_char(&mut self, c: char) {
        if !c.is_control() {
            self.focused_field_mut().value.push(c);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        self.focused_field_mut().value.pop();
    }

    /// Clear the focused field
    pub fn clear_focused(&mut self) {
        self.focused_field_mut().value.clear();
    }

    /// Rebuild the cash-flow fields from the period count field.
    ///
    /// Values already entered for surviving periods are kept.
    pub fn apply_period_count(&mut self, max_periods: usize) -> Result<usize, InputError> {
        let n = parse_period_count(&self.periods.value, max_periods)?;
        self.resize_cash_flows(n);
        Ok(n)
    }

    /// Parse every field
    pub fn parse(&mut self, max_periods: usize) -> Result<FormValues, InputError> {
        self.apply_period_count(max_periods)?;
        let rate = parse_rate(&self.rate.value)?;
        let texts: Vec<&str> = self.cash_flows.iter().map(|f| f.value.as_str()).collect();
        let flows = parse_cash_flows(&texts, self.convention)?;
        Ok(FormValues { rate, flows })
    }

    fn resize_cash_flows(&mut self, n: usize) {
        let convention = self.convention;
        self.cash_flows.truncate(n);
        let start = self.cash_flows.len();
        self.cash_flows
            .extend((start..n).map(|i| InputField::new(cash_flow_label(convention, i), "")));
        if self.focus >= self.field_count() {
            self.focus = self.field_count() - 1;
        }
    }

    fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focused() {
            FieldKind::Periods => &mut self.periods,
            FieldKind::Rate => &mut self.rate,
            FieldKind::CashFlow(i) => &mut self.cash_flows[i],
        }
    }
}

fn cash_flow_label(convention: PeriodConvention, index: usize) -> String {
    format!("Cash Flow for Period {}", convention.period_label(index))
}
