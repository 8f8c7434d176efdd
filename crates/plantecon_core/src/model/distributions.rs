use rand::{Rng, distr::Distribution};
use serde::{Deserialize, Serialize};

use crate::error::DistributionError;

/// Sampling distribution for a Monte-Carlo input parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DistributionSpec {
    /// Degenerate distribution: every sample is `value`.
    Fixed { value: f64 },
    Normal { mean: f64, std_dev: f64 },
    /// Triangular over [min, max] with the most likely value at `mode`.
    Triangular { min: f64, mode: f64, max: f64 },
    Uniform { min: f64, max: f64 },
}

impl DistributionSpec {
    /// Draw one sample.
    ///
    /// Construction failures (negative standard deviation, inverted bounds)
    /// are input errors, not sampling noise, and fail the call.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, DistributionError> {
        match self {
            DistributionSpec::Fixed { value } => Ok(*value),
            DistributionSpec::Normal { mean, std_dev } => {
                rand_distr::Normal::new(*mean, *std_dev)
                    .map(|d| d.sample(rng))
                    .map_err(|_| DistributionError::InvalidDistributionParameters {
                        distribution: "normal",
                        reason: "std_dev must be non-negative and finite",
                    })
            }
            DistributionSpec::Triangular { min, mode, max } => {
                rand_distr::Triangular::new(*min, *max, *mode)
                    .map(|d| d.sample(rng))
                    .map_err(|_| DistributionError::InvalidDistributionParameters {
                        distribution: "triangular",
                        reason: "requires min <= mode <= max with min < max",
                    })
            }
            DistributionSpec::Uniform { min, max } => rand_distr::Uniform::new(*min, *max)
                .map(|d| d.sample(rng))
                .map_err(|_| DistributionError::InvalidDistributionParameters {
                    distribution: "uniform",
                    reason: "requires min < max",
                }),
        }
    }
}
