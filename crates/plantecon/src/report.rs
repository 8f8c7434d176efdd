//! Plain-text rendering of analysis results.

use plantecon_core::{MonteCarloStats, ProfitabilityResult, SensitivityRow};

use crate::format::{format_currency, format_percent, format_rate, format_years};

/// Render a single profitability result as an aligned key/value block.
pub fn render_analysis(result: &ProfitabilityResult) -> String {
    let mut out = String::new();

    out.push_str("Profitability Analysis\n");
    out.push_str("======================\n");
    push_line(&mut out, "NPV", &format_currency(result.npv));
    push_line(&mut out, "IRR", &render_irr(result));
    push_line(&mut out, "Payback period", &render_payback(result));
    push_line(&mut out, "ROI", &format_percent(result.roi));
    push_line(
        &mut out,
        "Profitability index",
        &format!("{:.3}", result.profitability_index),
    );
    push_line(
        &mut out,
        "Annual cash flow",
        &format_currency(result.annual_cash_flow),
    );
    push_line(
        &mut out,
        "Total revenue",
        &format_currency(result.total_revenue),
    );
    push_line(&mut out, "Total costs", &format_currency(result.total_costs));

    out
}

/// Render a sensitivity table, one line per row.
pub fn render_sensitivity(rows: &[SensitivityRow]) -> String {
    let mut out = String::new();

    out.push_str("Sensitivity Analysis\n");
    out.push_str("====================\n");
    out.push_str(&format!(
        "{:<24} {:>8} {:>16} {:>12} {:>14}\n",
        "Parameter", "Change", "NPV", "IRR", "Payback"
    ));

    for row in rows {
        let irr = if row.irr.converged {
            format_rate(row.irr.rate)
        } else {
            format!("~{}", format_rate(row.irr.rate))
        };
        out.push_str(&format!(
            "{:<24} {:>7.1}% {:>16} {:>12} {:>14}\n",
            row.parameter.label(),
            row.percent_change,
            format_currency(row.npv),
            irr,
            format_years(row.payback_period),
        ));
    }

    out
}

/// Render Monte-Carlo summary statistics.
pub fn render_monte_carlo(stats: &MonteCarloStats) -> String {
    let mut out = String::new();

    out.push_str("Monte-Carlo Analysis\n");
    out.push_str("====================\n");
    push_line(&mut out, "Simulations", &stats.n_simulations.to_string());
    push_line(&mut out, "Mean NPV", &format_currency(stats.mean_npv));
    push_line(
        &mut out,
        "Std dev NPV",
        &format_currency(stats.std_dev_npv),
    );
    push_line(&mut out, "Min NPV", &format_currency(stats.min_npv));
    push_line(&mut out, "Max NPV", &format_currency(stats.max_npv));

    for (fraction, value) in &stats.npv_percentiles {
        let label = format!("P{:.0} NPV", fraction * 100.0);
        push_line(&mut out, &label, &format_currency(*value));
    }

    push_line(
        &mut out,
        "Positive-NPV share",
        &format_rate(stats.success_rate),
    );

    out
}

fn render_irr(result: &ProfitabilityResult) -> String {
    if result.irr.converged {
        format_rate(result.irr.rate)
    } else {
        format!("~{} (did not converge)", format_rate(result.irr.rate))
    }
}

fn render_payback(result: &ProfitabilityResult) -> String {
    if result.recovers_investment() {
        format_years(result.payback_period)
    } else {
        "not recovered within project life".to_string()
    }
}

fn push_line(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{label:<22} {value}\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantecon_core::{ProjectParameters, analyze_profitability};

    fn sample_result() -> ProfitabilityResult {
        let params = ProjectParameters {
            capital_investment: 10_000_000.0,
            annual_revenue: 5_000_000.0,
            annual_operating_costs: 3_000_000.0,
            project_lifetime: 20,
            discount_rate: 0.12,
            tax_rate: 0.30,
            salvage_value: 1_000_000.0,
        };
        analyze_profitability(&params).unwrap()
    }

    #[test]
    fn test_render_analysis_contains_metrics() {
        let text = render_analysis(&sample_result());
        assert!(text.contains("NPV"));
        assert!(text.contains("Payback period"));
        assert!(text.contains("years"));
    }

    #[test]
    fn test_unrecovered_payback_reads_as_sentinel() {
        let params = ProjectParameters {
            capital_investment: 10_000_000.0,
            annual_revenue: 2_000_000.0,
            annual_operating_costs: 3_000_000.0,
            project_lifetime: 20,
            discount_rate: 0.12,
            tax_rate: 0.30,
            salvage_value: 0.0,
        };
        let result = analyze_profitability(&params).unwrap();
        let text = render_analysis(&result);
        assert!(text.contains("not recovered within project life"));
    }
}
