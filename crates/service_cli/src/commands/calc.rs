//! Calc command implementation
//!
//! Values a cash-flow list given on the command line and prints the result.

use std::str::FromStr;

use cashflow_core::input::{parse_cash_flow_list, parse_rate};
use cashflow_core::types::CashFlowSchedule;
use cashflow_core::valuation::{fv_at, value_schedule, ValuationReport};
use clap::Args;
use serde::Serialize;
use tracing::info;

use super::resolve_convention;
use crate::config::CalcConfig;
use crate::{CliError, Result};

/// Arguments of `npv-calc calc`
#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Per-period rate as a decimal (0.1) or percentage (10%)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: String,

    /// Cash flows, comma or space separated (e.g. "-500,200,300")
    #[arg(short, long, allow_hyphen_values = true)]
    pub flows: String,

    /// Period convention: zero (first flow at t=0) or one (first flow at t=1)
    #[arg(long)]
    pub convention: Option<String>,

    /// Also compound the flows to this period
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Output format (table, json, csv)
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Boxed text table
    Table,
    /// Pretty-printed JSON
    Json,
    /// Per-period rows as CSV
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(CliError::invalid_argument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// Future value at a user-chosen horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonValue {
    /// Period the flows are compounded to
    pub horizon: usize,
    /// Future value at that period
    pub value: f64,
}

/// Everything the calc command prints
#[derive(Debug, Clone, Serialize)]
pub struct CalcOutput {
    /// Full valuation
    #[serde(flatten)]
    pub report: ValuationReport,
    /// Value at `--horizon`, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_horizon: Option<HorizonValue>,
}

/// Parse the arguments and value the schedule
pub fn evaluate(args: &CalcArgs, config: &CalcConfig) -> Result<CalcOutput> {
    let convention = resolve_convention(args.convention.as_deref(), config.convention)?;
    let rate = parse_rate(&args.rate)?;
    let flows = parse_cash_flow_list(&args.flows, convention)?;
    if flows.len() > config.max_periods {
        return Err(CliError::invalid_argument(format!(
            "{} cash flows exceed max_periods ({})",
            flows.len(),
            config.max_periods
        )));
    }

    let schedule = CashFlowSchedule::new(flows, convention)?;
    let report = value_schedule(&schedule, rate)?;

    let at_horizon = match args.horizon {
        Some(horizon) => Some(HorizonValue {
            horizon,
            value: fv_at(schedule.flows(), rate, convention, horizon)?,
        }),
        None => None,
    };

    Ok(CalcOutput { report, at_horizon })
}

/// Render the output in the requested format
pub fn render(output: &CalcOutput, format: OutputFormat, decimals: usize) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(output, decimals)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Csv => render_csv(&output.report),
    }
}

/// Run the calc command
pub fn run(args: &CalcArgs, config: &CalcConfig) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    info!("Starting valuation...");
    info!("  Rate: {}", args.rate);
    info!("  Output format: {}", args.format);

    let output = evaluate(args, config)?;
    info!(
        npv = output.report.npv,
        fv = output.report.fv,
        periods = output.report.periods.len(),
        "Valuation complete"
    );

    print!("{}", render(&output, format, config.decimals)?);
    Ok(())
}

fn render_table(output: &CalcOutput, d: usize) -> String {
    let report = &output.report;
    let mut lines = vec![
        String::new(),
        format!("NPV: {:.*}", d, report.npv),
        format!("FV:  {:.*}  (at period {})", d, report.fv, report.horizon),
    ];
    if let Some(h) = &output.at_horizon {
        lines.push(format!("FV:  {:.*}  (at period {})", d, h.value, h.horizon));
    }
    lines.push(format!(
        "Rate: {}  Convention: {}\n",
        report.rate, report.convention
    ));

    lines.push("┌────────┬──────────────┬────────────┬──────────────┬────────────┬──────────────┐".into());
    lines.push("│ Period │ Cash Flow    │ Discount   │ PV           │ Compound   │ FV           │".into());
    lines.push("├────────┼──────────────┼────────────┼──────────────┼────────────┼──────────────┤".into());
    lines.extend(report.periods.iter().map(|p| {
        format!(
            "│ {:>6} │ {:>12.*} │ {:>10.6} │ {:>12.*} │ {:>10.6} │ {:>12.*} │",
            p.time,
            d,
            p.cash_flow,
            p.discount_factor,
            d,
            p.present_value,
            p.compound_factor,
            d,
            p.future_value
        )
    }));
    lines.push("└────────┴──────────────┴────────────┴──────────────┴────────────┴──────────────┘".into());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_csv(report: &ValuationReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for period in &report.periods {
        writer.serialize(period)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
