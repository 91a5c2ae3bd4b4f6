//! TUI application state and key handling.
//!
//! Kept free of any terminal handle so that it can be driven directly in tests.

use super::form::{CalculatorForm, FieldKind};
use crate::config::CalcConfig;
use cashflow_core::types::{CashFlowSchedule, PeriodConvention};
use cashflow_core::valuation::{value_schedule, ValuationReport};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

/// Message shown when any calculator input fails to parse
pub const INPUT_ERROR_MESSAGE: &str =
    "Please enter valid numbers for periods, rate, and cash flows.";

/// Message shown when the period count fails to parse
pub const PERIODS_ERROR_MESSAGE: &str = "Please enter a valid number of periods.";

/// Available screens in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Input form with NPV/FV labels
    Calculator,
    /// Cash-flow timeline and factor charts
    Chart,
    /// Per-period valuation table
    Schedule,
}

impl Screen {
    /// Get screen title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Chart => "Cash Flow Chart",
            Self::Schedule => "Schedule",
        }
    }
}

/// Blocking message dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    /// Dialog title
    pub title: String,
    /// Body text, may span several lines
    pub message: String,
}

impl Dialog {
    fn input_error(headline: &str, detail: impl std::fmt::Display) -> Self {
        Self {
            title: "Input Error".to_string(),
            message: format!("{headline}\n{detail}"),
        }
    }
}

/// TUI application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,
    /// Input form
    pub form: CalculatorForm,
    /// Last successful valuation
    pub report: Option<ValuationReport>,
    /// Open dialog; blocks all other input
    pub dialog: Option<Dialog>,
    /// First visible row of the schedule table
    pub schedule_offset: usize,
    /// Decimal places for displayed values
    pub decimals: usize,
    /// Largest accepted period count
    pub max_periods: usize,
    /// Exit flag
    pub should_quit: bool,
}

impl AppState {
    /// Build the initial state from configuration
    pub fn new(config: &CalcConfig) -> Self {
        Self {
            screen: Screen::Calculator,
            form: CalculatorForm::new(
                config.default_periods,
                config.default_rate.clone(),
                config.convention,
            ),
            report: None,
            dialog: None,
            schedule_offset: 0,
            decimals: config.decimals,
            max_periods: config.max_periods,
            should_quit: false,
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dialog = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.screen = Screen::Calculator,
            KeyCode::F(2) => self.screen = Screen::Chart,
            KeyCode::F(3) => self.screen = Screen::Schedule,
            KeyCode::F(4) => self.toggle_convention(),
            KeyCode::F(5) => self.calculate(),
            code => match self.screen {
                Screen::Calculator => self.handle_form_key(code),
                Screen::Chart | Screen::Schedule => self.handle_view_key(code),
            },
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Enter => match self.form.focused() {
                FieldKind::Periods => self.set_periods(),
                FieldKind::Rate | FieldKind::CashFlow(_) => self.calculate(),
            },
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Delete => self.form.clear_focused(),
            KeyCode::Char(c) => self.form.insert_char(c),
            _ => {}
        }
    }

    fn handle_view_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.schedule_offset = self.schedule_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let rows = self.report.as_ref().map_or(0, |r| r.periods.len());
                if self.schedule_offset + 1 < rows {
                    self.schedule_offset += 1;
                }
            }
            _ => {}
        }
    }

    /// Rebuild the cash-flow fields from the period count
    pub fn set_periods(&mut self) {
        match self.form.apply_period_count(self.max_periods) {
            Ok(n) => info!(periods = n, "cash-flow fields rebuilt"),
            Err(e) => {
                warn!(error = %e, "invalid period count");
                self.dialog = Some(Dialog::input_error(PERIODS_ERROR_MESSAGE, e));
            }
        }
    }

    /// Parse the form and value the schedule.
    ///
    /// On failure the previous results stay on screen and a dialog opens.
    pub fn calculate(&mut self) {
        let values = match self.form.parse(self.max_periods) {
            Ok(values) => values,
            Err(e) => {
                warn!(error = %e, "invalid calculator input");
                self.dialog = Some(Dialog::input_error(INPUT_ERROR_MESSAGE, e));
                return;
            }
        };

        let result = CashFlowSchedule::new(values.flows, self.form.convention())
            .and_then(|schedule| value_schedule(&schedule, values.rate));

        match result {
            Ok(report) => {
                info!(npv = report.npv, fv = report.fv, "valuation complete");
                self.report = Some(report);
                self.schedule_offset = 0;
            }
            Err(e) => {
                warn!(error = %e, "valuation failed");
                self.dialog = Some(Dialog {
                    title: "Calculation Error".to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    /// Switch between zero- and one-based periods.
    ///
    /// Results computed under the old convention are discarded.
    pub fn toggle_convention(&mut self) {
        let convention: PeriodConvention = self.form.convention().toggled();
        self.form.set_convention(convention);
        self.report = None;
        info!(%convention, "period convention changed");
    }

    /// `NPV: 248.69`, or `NPV: ` before the first calculation
    pub fn npv_label(&self) -> String {
        self.result_label("NPV", |r| r.npv)
    }

    /// `FV: 331.00`, or `FV: ` before the first calculation
    pub fn fv_label(&self) -> String {
        self.result_label("FV", |r| r.fv)
    }

    fn result_label(&self, name: &str, value: impl Fn(&ValuationReport) -> f64) -> String {
        match &self.report {
            Some(report) => format!("{name}: {:.*}", self.decimals, value(report)),
            None => format!("{name}: "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(state: &mut AppState, code: KeyCode) {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    /// Fill rate and flows via the keyboard, starting from the period field
    fn fill(state: &mut AppState, rate: &str, flows: &[&str]) {
        press(state, KeyCode::Tab);
        press(state, KeyCode::Delete);
        type_text(state, rate);
        for flow in flows {
            press(state, KeyCode::Tab);
            type_text(state, flow);
        }
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(Screen::Calculator.title(), "Calculator");
        assert_eq!(Screen::Chart.title(), "Cash Flow Chart");
        assert_eq!(Screen::Schedule.title(), "Schedule");
    }

    #[test]
    fn test_calculate_zero_based() {
        let mut state = AppState::new(&CalcConfig::default());
        fill(&mut state, "0.1", &["100", "100", "100"]);
        press(&mut state, KeyCode::Enter);

        assert!(state.dialog.is_none());
        assert_eq!(state.npv_label(), "NPV: 273.55");
        assert_eq!(state.fv_label(), "FV: 331.00");
    }

    #[test]
    fn test_calculate_one_based() {
        let config = CalcConfig {
            convention: PeriodConvention::OneBased,
            ..CalcConfig::default()
        };
        let mut state = AppState::new(&config);
        fill(&mut state, "0.1", &["100", "100", "100"]);
        press(&mut state, KeyCode::F(5));

        assert_eq!(state.npv_label(), "NPV: 248.69");
        assert_eq!(state.fv_label(), "FV: 331.00");
    }

    #[test]
    fn test_labels_before_calculation() {
        let state = AppState::new(&CalcConfig::default());
        assert_eq!(state.npv_label(), "NPV: ");
        assert_eq!(state.fv_label(), "FV: ");
    }

    #[test]
    fn test_invalid_input_opens_blocking_dialog() {
        let mut state = AppState::new(&CalcConfig::default());
        fill(&mut state, "abc", &["100", "100", "100"]);
        press(&mut state, KeyCode::Enter);

        let dialog = state.dialog.clone().expect("dialog");
        assert_eq!(dialog.title, "Input Error");
        assert!(dialog.message.starts_with(INPUT_ERROR_MESSAGE));
        assert!(dialog.message.contains("abc"));
        assert!(state.report.is_none());

        // Keys other than Enter/Esc are swallowed while the dialog is open
        press(&mut state, KeyCode::Char('9'));
        press(&mut state, KeyCode::F(2));
        assert_eq!(state.screen, Screen::Calculator);
        assert!(state.dialog.is_some());

        press(&mut state, KeyCode::Esc);
        assert!(state.dialog.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_error_keeps_previous_results() {
        let mut state = AppState::new(&CalcConfig::default());
        fill(&mut state, "0.1", &["100", "100", "100"]);
        press(&mut state, KeyCode::Enter);
        let before = state.report.clone();

        type_text(&mut state, "x");
        press(&mut state, KeyCode::Enter);
        assert!(state.dialog.is_some());
        assert_eq!(state.report, before);
    }

    #[test]
    fn test_set_periods_via_enter() {
        let mut state = AppState::new(&CalcConfig::default());
        press(&mut state, KeyCode::Delete);
        type_text(&mut state, "5");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.form.cash_flow_fields().len(), 5);
        assert!(state.dialog.is_none());
    }

    #[test]
    fn test_set_periods_invalid() {
        let mut state = AppState::new(&CalcConfig::default());
        press(&mut state, KeyCode::Delete);
        type_text(&mut state, "-3");
        press(&mut state, KeyCode::Enter);

        let dialog = state.dialog.expect("dialog");
        assert!(dialog.message.starts_with(PERIODS_ERROR_MESSAGE));
    }

    #[test]
    fn test_toggle_convention_discards_results() {
        let mut state = AppState::new(&CalcConfig::default());
        fill(&mut state, "0.1", &["1", "2", "3"]);
        press(&mut state, KeyCode::Enter);
        assert!(state.report.is_some());

        press(&mut state, KeyCode::F(4));
        assert_eq!(state.form.convention(), PeriodConvention::OneBased);
        assert!(state.report.is_none());
    }

    #[test]
    fn test_screen_switching_and_quit() {
        let mut state = AppState::new(&CalcConfig::default());
        press(&mut state, KeyCode::F(2));
        assert_eq!(state.screen, Screen::Chart);
        press(&mut state, KeyCode::F(3));
        assert_eq!(state.screen, Screen::Schedule);

        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_q_is_text_on_calculator_screen() {
        let mut state = AppState::new(&CalcConfig::default());
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);
        assert_eq!(state.form.periods_field().value, "3q");
    }

    #[test]
    fn test_ctrl_c_quits_even_with_dialog() {
        let mut state = AppState::new(&CalcConfig::default());
        state.dialog = Some(Dialog {
            title: "t".to_string(),
            message: "m".to_string(),
        });
        state.handle_key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        });
        assert!(state.should_quit);
    }

    #[test]
    fn test_schedule_scrolling_is_bounded() {
        let mut state = AppState::new(&CalcConfig::default());
        fill(&mut state, "0.1", &["1", "2", "3"]);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::F(3));

        for _ in 0..10 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.schedule_offset, 2);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.schedule_offset, 1);
    }
}
