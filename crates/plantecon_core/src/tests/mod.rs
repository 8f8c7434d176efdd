//! Integration tests for the profitability engine
//!
//! Tests are organized by topic:
//! - `cash_flow` - After-tax cash-flow construction
//! - `metrics` - NPV, IRR, payback period, ROI
//! - `analysis` - Aggregated profitability results
//! - `sensitivity` - One-at-a-time sensitivity tables
//! - `monte_carlo` - Stochastic sampling and summary statistics

mod sensitivity;

use crate::model::ProjectParameters;

/// Reference case: $10M plant, $2M annual gross profit, 20 years.
///
/// Straight-line depreciation = (10M - 1M) / 20 = $450k/year, so each
/// operating year flows (2M - 450k) * (1 - 0.30) + 450k = $1.535M, with an
/// extra $1M salvage in year 20.
fn reference_params() -> ProjectParameters {
    ProjectParameters {
        capital_investment: 10_000_000.0,
        annual_revenue: 5_000_000.0,
        annual_operating_costs: 3_000_000.0,
        project_lifetime: 20,
        discount_rate: 0.12,
        tax_rate: 0.30,
        salvage_value: 1_000_000.0,
    }
}
