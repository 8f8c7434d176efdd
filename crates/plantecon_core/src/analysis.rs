//! Profitability aggregation: the public entry point tying the cash-flow
//! builder to the discounted-cash-flow metrics.

use crate::cash_flow::build_cash_flows;
use crate::error::InputError;
use crate::metrics::{irr, npv, payback_period, roi};
use crate::model::{ProfitabilityResult, ProjectParameters};

/// Run the full profitability analysis for one parameter set.
///
/// Builds the after-tax cash-flow series, then evaluates NPV at the model
/// discount rate, IRR over the full series, payback over the operating
/// flows, ROI, profitability index and lifetime totals. Sub-results are
/// bundled verbatim; a non-convergent IRR shows up as `irr.converged ==
/// false`, never as an error.
pub fn analyze_profitability(
    params: &ProjectParameters,
) -> Result<ProfitabilityResult, InputError> {
    // Validates structurally before anything is computed.
    let cash_flows = build_cash_flows(params)?;

    let npv_value = npv(cash_flows.as_slice(), params.discount_rate)?;
    let irr_solution = irr(cash_flows.as_slice())?;
    let payback = payback_period(params.capital_investment, cash_flows.operating_flows());

    let annual_profit = params.annual_gross_profit();
    let roi_value = roi(annual_profit, params.capital_investment)?;
    let profitability_index = (npv_value + params.capital_investment) / params.capital_investment;

    let break_even_price = if params.annual_revenue > params.annual_operating_costs {
        params.annual_operating_costs / (params.annual_revenue / annual_profit)
    } else {
        0.0
    };

    let lifetime = f64::from(params.project_lifetime);
    let annual_cash_flow = cash_flows.operating_flows().first().copied().unwrap_or(0.0);

    Ok(ProfitabilityResult {
        npv: npv_value,
        irr: irr_solution,
        payback_period: payback,
        roi: roi_value,
        profitability_index,
        annual_cash_flow,
        total_revenue: params.annual_revenue * lifetime,
        total_costs: params.annual_operating_costs * lifetime,
        break_even_price,
        cash_flows,
    })
}
