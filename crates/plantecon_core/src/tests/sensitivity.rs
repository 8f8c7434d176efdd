//! Tests for one-at-a-time sensitivity analysis
//!
//! These tests verify that:
//! - One row comes back per (parameter, percent change) pair, in input order
//! - The 0% row reproduces the unperturbed base case
//! - Only the named parameter moves; all others stay at base
//! - Structurally invalid perturbations are skipped, not fatal

use super::reference_params;
use crate::analysis::analyze_profitability;
use crate::error::InputError;
use crate::model::Parameter;
use crate::sensitivity::sensitivity_analysis;

#[test]
fn test_one_row_per_point() {
    let base = reference_params();
    let ranges = vec![(Parameter::AnnualRevenue, vec![-10.0, 0.0, 10.0])];

    let rows = sensitivity_analysis(&base, &ranges).unwrap();

    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.parameter, Parameter::AnnualRevenue);
    }
    assert_eq!(rows[0].percent_change, -10.0);
    assert_eq!(rows[1].percent_change, 0.0);
    assert_eq!(rows[2].percent_change, 10.0);
}

#[test]
fn test_zero_change_row_equals_base_case() {
    let base = reference_params();
    let base_result = analyze_profitability(&base).unwrap();

    let ranges = vec![(Parameter::AnnualRevenue, vec![-10.0, 0.0, 10.0])];
    let rows = sensitivity_analysis(&base, &ranges).unwrap();

    let zero_row = &rows[1];
    assert!((zero_row.npv - base_result.npv).abs() < 1e-9);
    assert_eq!(zero_row.irr, base_result.irr);
    assert!((zero_row.payback_period - base_result.payback_period).abs() < 1e-9);
}

#[test]
fn test_npv_increases_with_revenue() {
    let base = reference_params();
    let ranges = vec![(Parameter::AnnualRevenue, vec![-10.0, 0.0, 10.0])];
    let rows = sensitivity_analysis(&base, &ranges).unwrap();

    assert!(rows[0].npv < rows[1].npv);
    assert!(rows[1].npv < rows[2].npv);
}

#[test]
fn test_npv_decreases_with_operating_costs() {
    let base = reference_params();
    let ranges = vec![(Parameter::AnnualOperatingCosts, vec![-20.0, 20.0])];
    let rows = sensitivity_analysis(&base, &ranges).unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows[0].npv > rows[1].npv);
}

#[test]
fn test_multiple_parameters_keep_input_order() {
    let base = reference_params();
    let ranges = vec![
        (Parameter::CapitalInvestment, vec![-10.0, 10.0]),
        (Parameter::DiscountRate, vec![-10.0, 10.0]),
    ];
    let rows = sensitivity_analysis(&base, &ranges).unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].parameter, Parameter::CapitalInvestment);
    assert_eq!(rows[1].parameter, Parameter::CapitalInvestment);
    assert_eq!(rows[2].parameter, Parameter::DiscountRate);
    assert_eq!(rows[3].parameter, Parameter::DiscountRate);
}

#[test]
fn test_invalid_perturbation_is_skipped() {
    let base = reference_params();
    // -100% zeroes the capital investment, which no analysis accepts.
    let ranges = vec![(Parameter::CapitalInvestment, vec![-100.0, 0.0])];
    let rows = sensitivity_analysis(&base, &ranges).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].percent_change, 0.0);
}

#[test]
fn test_lifetime_perturbation_rounds_to_years() {
    let base = reference_params();
    // +12% of 20 years = 22.4, applied as 22 whole years.
    let ranges = vec![(Parameter::ProjectLifetime, vec![12.0])];
    let rows = sensitivity_analysis(&base, &ranges).unwrap();

    assert_eq!(rows.len(), 1);

    let mut extended = base.clone();
    extended.project_lifetime = 22;
    let expected = analyze_profitability(&extended).unwrap();
    assert!((rows[0].npv - expected.npv).abs() < 1e-9);
}

#[test]
fn test_invalid_base_fails_fast() {
    let mut base = reference_params();
    base.capital_investment = 0.0;
    let ranges = vec![(Parameter::AnnualRevenue, vec![0.0])];

    assert!(matches!(
        sensitivity_analysis(&base, &ranges),
        Err(InputError::NonPositiveCapitalInvestment(_))
    ));
}
