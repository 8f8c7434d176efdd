//! Discounted-cash-flow metrics: NPV, IRR, payback period, ROI.
//!
//! All functions here are pure computations over in-memory slices. Invalid
//! inputs fail fast with [`InputError`]; numerical edge cases degrade to
//! flagged or sentinel results instead of erroring, so one bad point cannot
//! abort a batch run.

use crate::error::InputError;
use crate::model::IrrSolution;

/// Default Newton-Raphson iteration cap for [`irr`].
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
/// Default convergence tolerance for [`irr`] (absolute NPV).
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Initial rate guess for the IRR solve.
const INITIAL_GUESS: f64 = 0.10;
/// Lower clamp keeping Newton steps away from the -100% singularity.
const MIN_RATE: f64 = -0.99;

/// Net present value of `cash_flows` discounted at `discount_rate`.
///
/// Computes sum of `cf[i] / (1 + rate)^i` with year 0 undiscounted.
pub fn npv(cash_flows: &[f64], discount_rate: f64) -> Result<f64, InputError> {
    if discount_rate <= -1.0 {
        return Err(InputError::DiscountRateOutOfRange(discount_rate));
    }
    Ok(cash_flows
        .iter()
        .enumerate()
        .map(|(i, cf)| cf / (1.0 + discount_rate).powi(i as i32))
        .sum())
}

/// dNPV/drate. The year-0 flow has no rate dependence.
fn npv_derivative(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, cf)| -(i as f64) * cf / (1.0 + rate).powi(i as i32 + 1))
        .sum()
}

/// Internal rate of return with the default iteration cap and tolerance.
pub fn irr(cash_flows: &[f64]) -> Result<IrrSolution, InputError> {
    irr_with(cash_flows, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE)
}

/// Newton-Raphson IRR solve.
///
/// Converges when |NPV| drops below `tolerance`. A stalled derivative or an
/// exhausted iteration cap returns the last rate with `converged: false`;
/// callers must treat that rate as low-confidence rather than a root. Series
/// with multiple sign changes can have several IRRs or none; this solver
/// finds at most one.
pub fn irr_with(
    cash_flows: &[f64],
    max_iterations: usize,
    tolerance: f64,
) -> Result<IrrSolution, InputError> {
    if cash_flows.len() < 2 {
        return Err(InputError::TooFewCashFlows(cash_flows.len()));
    }

    let mut rate = INITIAL_GUESS;
    for iteration in 0..max_iterations {
        // The clamp below keeps rate > -1, so npv cannot fail here.
        let value = npv(cash_flows, rate)?;
        if value.abs() < tolerance {
            return Ok(IrrSolution {
                rate,
                converged: true,
                iterations: iteration,
            });
        }

        let derivative = npv_derivative(cash_flows, rate);
        if derivative.abs() < tolerance {
            // Stalled: a Newton step would divide by ~0.
            return Ok(IrrSolution {
                rate,
                converged: false,
                iterations: iteration,
            });
        }

        rate -= value / derivative;
        if rate < MIN_RATE {
            rate = MIN_RATE;
        }
    }

    Ok(IrrSolution {
        rate,
        converged: false,
        iterations: max_iterations,
    })
}

/// Fractional-year payback period.
///
/// Accumulates operating flows year by year and linearly interpolates inside
/// the year where the cumulative total crosses `initial_investment`. If the
/// investment is never recovered within the series, extrapolates at the
/// final year's flow; the result then exceeds the series length (or diverges
/// for a non-positive final flow) and callers read anything beyond the
/// project lifetime as "not recovered within project life".
#[must_use]
pub fn payback_period(initial_investment: f64, annual_cash_flows: &[f64]) -> f64 {
    let mut cumulative = 0.0;
    for (year, cash_flow) in annual_cash_flows.iter().enumerate() {
        cumulative += cash_flow;
        if cumulative >= initial_investment {
            let excess = cumulative - initial_investment;
            return (year + 1) as f64 - excess / cash_flow;
        }
    }

    match annual_cash_flows.last() {
        Some(last) => {
            annual_cash_flows.len() as f64 + (initial_investment - cumulative) / last
        }
        None => f64::INFINITY,
    }
}

/// Return on investment in percent: annual profit over investment.
pub fn roi(annual_profit: f64, investment: f64) -> Result<f64, InputError> {
    if investment <= 0.0 {
        return Err(InputError::NonPositiveCapitalInvestment(investment));
    }
    Ok(annual_profit / investment * 100.0)
}
