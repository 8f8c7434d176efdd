mod distributions;
mod parameters;
mod results;

pub use distributions::DistributionSpec;
pub use parameters::{Parameter, ProjectParameters};
pub use results::{
    CashFlowSeries, IrrSolution, MonteCarloStats, ProfitabilityResult, SensitivityRow,
};
