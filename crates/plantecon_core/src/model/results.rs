use serde::{Deserialize, Serialize};

use crate::model::Parameter;

/// After-tax cash flows indexed by project year.
///
/// Index 0 holds the (negative) initial investment; indices 1..=N hold
/// operating-period flows, with salvage recovery folded into year N.
/// Invariant: length = project lifetime + 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries(Vec<f64>);

impl CashFlowSeries {
    pub(crate) fn new(flows: Vec<f64>) -> Self {
        debug_assert!(flows.len() >= 2, "series needs year 0 plus one operating year");
        Self(flows)
    }

    /// The initial-investment flow (negative).
    #[must_use]
    pub fn year_zero(&self) -> f64 {
        self.0[0]
    }

    /// Flows for operating years 1..=N.
    #[must_use]
    pub fn operating_flows(&self) -> &[f64] {
        &self.0[1..]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of entries, project lifetime + 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Running totals of the operating flows, one entry per operating year.
    #[must_use]
    pub fn cumulative_operating(&self) -> Vec<f64> {
        self.operating_flows()
            .iter()
            .scan(0.0, |acc, cf| {
                *acc += cf;
                Some(*acc)
            })
            .collect()
    }
}

/// Outcome of the Newton-Raphson IRR solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrSolution {
    /// Internal rate of return as a decimal fraction.
    pub rate: f64,
    /// False when the solver stalled or hit its iteration cap. The rate is
    /// then the last estimate and must be reported as low-confidence, not
    /// presented as an exact root.
    pub converged: bool,
    /// Newton-Raphson iterations performed.
    pub iterations: usize,
}

/// Full metrics bundle for one parameter set.
///
/// Derived and read-only; recomputed fresh per call with no smoothing or
/// rounding (display formatting is the caller's concern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityResult {
    pub npv: f64,
    pub irr: IrrSolution,
    /// Fractional years to recover the investment. Values beyond the
    /// project lifetime mean the investment is not recovered in-life.
    pub payback_period: f64,
    /// Return on investment, in percent.
    pub roi: f64,
    pub profitability_index: f64,
    /// First operating-year after-tax cash flow.
    pub annual_cash_flow: f64,
    /// Undiscounted revenue over the whole lifetime.
    pub total_revenue: f64,
    /// Undiscounted operating costs over the whole lifetime.
    pub total_costs: f64,
    /// Operating cost scaled by the profit margin; zero when the plant runs
    /// at or below cost.
    pub break_even_price: f64,
    pub cash_flows: CashFlowSeries,
}

impl ProfitabilityResult {
    /// Whether cumulative operating flows recover the investment within the
    /// project lifetime.
    #[must_use]
    pub fn recovers_investment(&self) -> bool {
        self.payback_period >= 0.0
            && self.payback_period <= self.cash_flows.operating_flows().len() as f64
    }
}

/// One entry of a sensitivity table: a single parameter perturbed by a
/// single percentage, all others held at base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRow {
    pub parameter: Parameter,
    pub percent_change: f64,
    pub npv: f64,
    pub irr: IrrSolution,
    pub payback_period: f64,
}

/// Aggregate statistics over a Monte-Carlo batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloStats {
    /// Number of simulations that produced a result.
    pub n_simulations: usize,
    pub mean_npv: f64,
    pub std_dev_npv: f64,
    pub min_npv: f64,
    pub max_npv: f64,
    /// (percentile fraction, NPV) pairs in the order requested,
    /// e.g. (0.05, ...), (0.50, ...), (0.95, ...).
    pub npv_percentiles: Vec<(f64, f64)>,
    /// Share of simulations with positive NPV.
    pub success_rate: f64,
}
