//! Interactive calculator command.

use cashflow_core::input::parse_cash_flow_list;
use cashflow_core::types::InputError;
use clap::Args;
use tracing::info;

use super::resolve_convention;
use crate::config::CalcConfig;
use crate::tui::{AppState, TuiApp};
use crate::Result;

/// Arguments of `npv-calc tui`
#[derive(Debug, Clone, Default, Args)]
pub struct TuiArgs {
    /// Pre-filled number of periods
    #[arg(short, long)]
    pub periods: Option<usize>,

    /// Pre-filled rate
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Pre-filled cash flows, comma or space separated
    #[arg(short, long, allow_hyphen_values = true)]
    pub flows: Option<String>,

    /// Period convention: zero or one
    #[arg(long)]
    pub convention: Option<String>,
}

/// Build the initial TUI state from configuration and flags
pub fn initial_state(args: &TuiArgs, config: &CalcConfig) -> Result<AppState> {
    let convention = resolve_convention(args.convention.as_deref(), config.convention)?;
    let flows = args
        .flows
        .as_deref()
        .map(|text| parse_cash_flow_list(text, convention))
        .transpose()?;
    if let Some(periods) = args.periods {
        check_period_count(periods, config.max_periods)?;
    }
    if let Some(flows) = &flows {
        check_period_count(flows.len(), config.max_periods)?;
    }

    let config = CalcConfig {
        convention,
        default_periods: args.periods.unwrap_or(config.default_periods),
        default_rate: args
            .rate
            .clone()
            .unwrap_or_else(|| config.default_rate.clone()),
        ..config.clone()
    };

    let mut state = AppState::new(&config);
    if let Some(flows) = flows {
        state.form.prefill_cash_flows(&flows);
        state.calculate();
    }
    Ok(state)
}

fn check_period_count(count: usize, max: usize) -> std::result::Result<usize, InputError> {
    if (1..=max).contains(&count) {
        Ok(count)
    } else {
        Err(InputError::PeriodCountOutOfRange {
            count: i64::try_from(count).unwrap_or(i64::MAX),
            max,
        })
    }
}

/// Run the interactive calculator; the last results are echoed on exit
pub fn run(args: &TuiArgs, config: &CalcConfig) -> Result<()> {
    let state = initial_state(args, config)?;
    info!(convention = %state.form.convention(), "starting TUI");

    let (npv, fv, has_report) = {
        let mut app = TuiApp::new(state)?;
        app.run()?;
        let state = app.state();
        (state.npv_label(), state.fv_label(), state.report.is_some())
    };

    if has_report {
        println!("{npv}\n{fv}");
    }
    info!("TUI closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use cashflow_core::types::PeriodConvention;

    #[test]
    fn test_initial_state_defaults() {
        let state = initial_state(&TuiArgs::default(), &CalcConfig::default()).unwrap();
        assert_eq!(state.form.cash_flow_fields().len(), 3);
        assert!(state.report.is_none());
    }

    #[test]
    fn test_initial_state_prefilled_flows_are_valued() {
        let args = TuiArgs {
            rate: Some("0.1".to_string()),
            flows: Some("100,100,100".to_string()),
            convention: Some("one".to_string()),
            ..TuiArgs::default()
        };
        let state = initial_state(&args, &CalcConfig::default()).unwrap();
        assert_eq!(state.form.convention(), PeriodConvention::OneBased);
        assert_eq!(state.npv_label(), "NPV: 248.69");
        assert_eq!(state.fv_label(), "FV: 331.00");
    }

    #[test]
    fn test_initial_state_periods_flag() {
        let args = TuiArgs {
            periods: Some(6),
            ..TuiArgs::default()
        };
        let state = initial_state(&args, &CalcConfig::default()).unwrap();
        assert_eq!(state.form.cash_flow_fields().len(), 6);
    }

    #[test]
    fn test_initial_state_rejects_periods_over_max() {
        let args = TuiArgs {
            periods: Some(5000),
            ..TuiArgs::default()
        };
        let err = initial_state(&args, &CalcConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Input(InputError::PeriodCountOutOfRange {
                count: 5000,
                max: 120
            })
        ));
    }

    #[test]
    fn test_initial_state_rejects_zero_periods() {
        let args = TuiArgs {
            periods: Some(0),
            ..TuiArgs::default()
        };
        assert!(initial_state(&args, &CalcConfig::default()).is_err());
    }

    #[test]
    fn test_initial_state_rejects_too_many_flows() {
        let config = CalcConfig {
            max_periods: 2,
            ..CalcConfig::default()
        };
        let args = TuiArgs {
            periods: Some(2),
            flows: Some("1,2,3".to_string()),
            ..TuiArgs::default()
        };
        let err = initial_state(&args, &config).unwrap_err();
        assert!(matches!(
            err,
            CliError::Input(InputError::PeriodCountOutOfRange { count: 3, max: 2 })
        ));
    }

    #[test]
    fn test_initial_state_accepts_flows_at_max() {
        let config = CalcConfig {
            max_periods: 3,
            ..CalcConfig::default()
        };
        let args = TuiArgs {
            flows: Some("1,2,3".to_string()),
            ..TuiArgs::default()
        };
        let state = initial_state(&args, &config).unwrap();
        assert_eq!(state.form.cash_flow_fields().len(), 3);
        assert!(state.report.is_some());
    }
}
