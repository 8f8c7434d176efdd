//! Monte-Carlo risk analysis over sampled parameter sets.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analysis::analyze_profitability;
use crate::error::DistributionError;
use crate::model::{
    DistributionSpec, MonteCarloStats, Parameter, ProfitabilityResult, ProjectParameters,
};

/// Simulations per RNG batch. Each batch seeds its own `SmallRng`
/// deterministically, so results are reproducible regardless of how batches
/// are scheduled across threads.
const BATCH_SIZE: usize = 100;

/// Standard reporting percentiles for [`summarize`].
pub const STANDARD_PERCENTILES: [f64; 3] = [0.05, 0.50, 0.95];

/// Monte-Carlo analysis with the default seed of 0.
pub fn monte_carlo_analysis(
    base: &ProjectParameters,
    distributions: &[(Parameter, DistributionSpec)],
    n_simulations: usize,
) -> Result<Vec<ProfitabilityResult>, DistributionError> {
    monte_carlo_analysis_seeded(base, distributions, n_simulations, 0)
}

/// Run up to `n_simulations` profitability analyses with sampled parameters.
///
/// Each simulation samples every listed parameter independently from its
/// distribution, clamps the sample to zero (project lifetime floors at one
/// year), and holds unlisted parameters at their base values. Samples whose
/// parameters still fail structural validation are skipped without aborting
/// the batch, so fewer than `n_simulations` results may come back. Result
/// order follows simulation index.
pub fn monte_carlo_analysis_seeded(
    base: &ProjectParameters,
    distributions: &[(Parameter, DistributionSpec)],
    n_simulations: usize,
    seed: u64,
) -> Result<Vec<ProfitabilityResult>, DistributionError> {
    base.validate()?;

    // Reject malformed distributions up front rather than once per sample.
    let mut probe = SmallRng::seed_from_u64(seed);
    for (_, spec) in distributions {
        spec.sample(&mut probe)?;
    }

    let num_batches = n_simulations.div_ceil(BATCH_SIZE);
    let run_batch = |batch: usize| -> Vec<ProfitabilityResult> {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(batch as u64));
        let batch_size = if batch == num_batches - 1 {
            n_simulations - batch * BATCH_SIZE
        } else {
            BATCH_SIZE
        };

        (0..batch_size)
            .filter_map(|_| {
                let params = sample_parameters(base, distributions, &mut rng)?;
                analyze_profitability(&params).ok()
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    let results = (0..num_batches)
        .into_par_iter()
        .flat_map_iter(run_batch)
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = (0..num_batches).flat_map(run_batch).collect();

    Ok(results)
}

/// Sample one parameter set. `None` only if a pre-validated distribution
/// fails to sample, which the probe pass above has already ruled out.
fn sample_parameters<R: Rng + ?Sized>(
    base: &ProjectParameters,
    distributions: &[(Parameter, DistributionSpec)],
    rng: &mut R,
) -> Option<ProjectParameters> {
    let mut params = base.clone();
    for (parameter, spec) in distributions {
        let value = spec.sample(rng).ok()?;
        parameter.apply_to(&mut params, value.max(0.0));
    }
    Some(params)
}

/// Summary statistics over a Monte-Carlo batch.
///
/// `percentiles` are fractions in [0, 1] and are reported in the order
/// given. Returns `None` for an empty batch.
#[must_use]
pub fn summarize(results: &[ProfitabilityResult], percentiles: &[f64]) -> Option<MonteCarloStats> {
    if results.is_empty() {
        return None;
    }

    let mut npvs: Vec<f64> = results.iter().map(|r| r.npv).collect();
    npvs.sort_by(f64::total_cmp);

    let n = npvs.len() as f64;
    let mean = npvs.iter().sum::<f64>() / n;
    let variance = npvs.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let success_rate = npvs.iter().filter(|v| **v > 0.0).count() as f64 / n;

    let npv_percentiles = percentiles
        .iter()
        .map(|&p| (p, percentile_of(&npvs, p)))
        .collect();

    Some(MonteCarloStats {
        n_simulations: npvs.len(),
        mean_npv: mean,
        std_dev_npv: variance.sqrt(),
        min_npv: npvs[0],
        max_npv: npvs[npvs.len() - 1],
        npv_percentiles,
        success_rate,
    })
}

/// Nearest-rank percentile on a pre-sorted, non-empty slice.
fn percentile_of(sorted: &[f64], fraction: f64) -> f64 {
    let idx = ((sorted.len() as f64 - 1.0) * fraction.clamp(0.0, 1.0)).round() as usize;
    sorted[idx]
}
