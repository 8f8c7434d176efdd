//! Chemical-plant profitability and cash-flow analysis.
//!
//! This crate derives capital-project economics from process parameters.
//! It supports:
//! - Multi-year after-tax cash-flow modeling with straight-line depreciation
//!   and terminal salvage recovery
//! - NPV, IRR (Newton-Raphson with an explicit convergence flag), payback
//!   period, ROI and profitability index
//! - One-at-a-time deterministic sensitivity analysis
//! - Monte-Carlo risk analysis with normal/triangular/uniform parameter
//!   distributions and reproducible seeding
//!
//! ```ignore
//! use plantecon_core::{ProjectParameters, analyze_profitability};
//!
//! let params = ProjectParameters {
//!     capital_investment: 10_000_000.0,
//!     annual_revenue: 5_000_000.0,
//!     annual_operating_costs: 3_000_000.0,
//!     project_lifetime: 20,
//!     discount_rate: 0.12,
//!     tax_rate: 0.30,
//!     salvage_value: 1_000_000.0,
//! };
//!
//! let result = analyze_profitability(&params)?;
//! println!("NPV {:.0}, IRR {:.4} (converged: {})",
//!     result.npv, result.irr.rate, result.irr.converged);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod cash_flow;
pub mod error;
pub mod metrics;
pub mod monte_carlo;
pub mod sensitivity;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::analyze_profitability;
pub use cash_flow::build_cash_flows;
pub use error::{DistributionError, InputError};
pub use model::{
    CashFlowSeries, DistributionSpec, IrrSolution, MonteCarloStats, Parameter,
    ProfitabilityResult, ProjectParameters, SensitivityRow,
};
pub use monte_carlo::{monte_carlo_analysis, monte_carlo_analysis_seeded, summarize};
pub use sensitivity::sensitivity_analysis;
