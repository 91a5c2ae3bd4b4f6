//! Batch-mode valuation through the public command API.

use approx::assert_relative_eq;
use service_cli::commands::calc::{evaluate, render, CalcArgs, OutputFormat};
use service_cli::config::CalcConfig;

fn args(flows: &str, convention: &str) -> CalcArgs {
    CalcArgs {
        rate: "0.1".to_string(),
        flows: flows.to_string(),
        convention: Some(convention.to_string()),
        horizon: None,
        format: "json".to_string(),
    }
}

#[test]
fn test_reference_example_one_based() {
    let output = evaluate(&args("100,100,100", "one"), &CalcConfig::default()).unwrap();
    assert_relative_eq!(output.report.npv, 248.69, epsilon = 5e-3);
    assert_relative_eq!(output.report.fv, 331.0, epsilon = 1e-9);
    assert_relative_eq!(output.report.fv_from_npv(), output.report.fv, epsilon = 1e-9);
}

#[test]
fn test_negative_leading_flow() {
    let output = evaluate(&args("-1000 400 400 400", "zero"), &CalcConfig::default()).unwrap();
    assert!(output.report.npv < 0.0);
    assert_eq!(output.report.periods[0].time, 0);
    assert_eq!(output.report.periods[0].discount_factor, 1.0);
}

#[test]
fn test_json_round_trips_through_serde_json() {
    let output = evaluate(&args("1,2,3", "one"), &CalcConfig::default()).unwrap();
    let json = render(&output, OutputFormat::Json, 2).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["horizon"], 3);
    assert_eq!(value["convention"], "one");
    assert_eq!(value["periods"][2]["time"], 3);
}

#[test]
fn test_invalid_flow_reports_period_label() {
    let err = evaluate(&args("1,x,3", "one"), &CalcConfig::default()).unwrap_err();
    assert!(err.to_string().contains("period 2"));
}
