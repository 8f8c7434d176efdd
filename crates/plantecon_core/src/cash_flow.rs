//! After-tax cash-flow construction with straight-line depreciation.

use crate::error::InputError;
use crate::model::{CashFlowSeries, ProjectParameters};

/// Build the year-indexed after-tax cash-flow series for a project.
///
/// Year 0 is the negative capital investment. Each operating year earns
/// `revenue - operating_costs`, pays tax on income net of straight-line
/// depreciation, and adds the depreciation back as a non-cash item. Losses
/// carry no tax credit: taxes floor at zero, so a loss-making year's flow is
/// simply the gross profit. Salvage value is recovered in the final year.
pub fn build_cash_flows(params: &ProjectParameters) -> Result<CashFlowSeries, InputError> {
    params.validate()?;

    let lifetime = params.project_lifetime;
    let depreciation = params.annual_depreciation();
    let gross_profit = params.annual_gross_profit();

    let mut flows = Vec::with_capacity(lifetime as usize + 1);
    flows.push(-params.capital_investment);

    for year in 1..=lifetime {
        let taxable_income = gross_profit - depreciation;
        let taxes = (taxable_income * params.tax_rate).max(0.0);
        let mut cash_flow = (taxable_income - taxes) + depreciation;
        if year == lifetime {
            cash_flow += params.salvage_value;
        }
        flows.push(cash_flow);
    }

    Ok(CashFlowSeries::new(flows))
}
