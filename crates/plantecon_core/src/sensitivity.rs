//! One-at-a-time deterministic sensitivity analysis.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analysis::analyze_profitability;
use crate::error::InputError;
use crate::model::{Parameter, ProjectParameters, SensitivityRow};

/// Re-run the profitability analysis with each listed parameter perturbed by
/// each percentage, one parameter at a time, all others held at base.
///
/// The base case is validated up front and fails fast. Individual rows whose
/// perturbed parameters fail structural validation (e.g. -100% on the
/// capital investment) are skipped rather than aborting the table. Row order
/// follows the input order of `ranges`.
pub fn sensitivity_analysis(
    base: &ProjectParameters,
    ranges: &[(Parameter, Vec<f64>)],
) -> Result<Vec<SensitivityRow>, InputError> {
    base.validate()?;

    let points: Vec<(Parameter, f64)> = ranges
        .iter()
        .flat_map(|(parameter, changes)| changes.iter().map(|&pct| (*parameter, pct)))
        .collect();

    #[cfg(feature = "parallel")]
    let rows = points
        .par_iter()
        .filter_map(|&(parameter, percent_change)| evaluate_row(base, parameter, percent_change))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let rows = points
        .iter()
        .filter_map(|&(parameter, percent_change)| evaluate_row(base, parameter, percent_change))
        .collect();

    Ok(rows)
}

/// `None` when the perturbed point fails structural validation; a bad point
/// must not abort the rest of the table.
fn evaluate_row(
    base: &ProjectParameters,
    parameter: Parameter,
    percent_change: f64,
) -> Option<SensitivityRow> {
    let mut perturbed = base.clone();
    let new_value = parameter.value_in(base) * (1.0 + percent_change / 100.0);
    parameter.apply_to(&mut perturbed, new_value);

    let result = analyze_profitability(&perturbed).ok()?;
    Some(SensitivityRow {
        parameter,
        percent_change,
        npv: result.npv,
        irr: result.irr,
        payback_period: result.payback_period,
    })
}
