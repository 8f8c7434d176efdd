use std::fmt;

/// Errors for structurally invalid analysis inputs.
///
/// These are rejected before any computation runs, never coerced. Numerical
/// edge cases (non-convergent IRR, unrecovered payback) are not errors; they
/// surface as flags and sentinel values on the result types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputError {
    NonPositiveCapitalInvestment(f64),
    ZeroProjectLifetime,
    /// Discount rate at or below -100%, where the discount factor is zero
    /// or flips sign.
    DiscountRateOutOfRange(f64),
    /// IRR needs at least the year-0 investment and one operating flow.
    TooFewCashFlows(usize),
    NegativeAnnualRevenue(f64),
    NegativeAnnualOperatingCosts(f64),
    SalvageOutOfRange {
        salvage_value: f64,
        capital_investment: f64,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NonPositiveCapitalInvestment(v) => {
                write!(f, "capital investment must be positive, got {v}")
            }
            InputError::ZeroProjectLifetime => {
                write!(f, "project lifetime must be at least one year")
            }
            InputError::DiscountRateOutOfRange(r) => {
                write!(f, "discount rate must be greater than -1, got {r}")
            }
            InputError::TooFewCashFlows(n) => {
                write!(f, "need at least 2 cash flows, got {n}")
            }
            InputError::NegativeAnnualRevenue(v) => {
                write!(f, "annual revenue cannot be negative, got {v}")
            }
            InputError::NegativeAnnualOperatingCosts(v) => {
                write!(f, "annual operating costs cannot be negative, got {v}")
            }
            InputError::SalvageOutOfRange {
                salvage_value,
                capital_investment,
            } => {
                write!(
                    f,
                    "salvage value {salvage_value} must be between 0 and the capital investment {capital_investment}"
                )
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Errors raised while setting up or running a Monte-Carlo batch.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A distribution spec cannot be constructed (e.g. negative standard
    /// deviation, triangular mode outside [min, max]).
    InvalidDistributionParameters {
        distribution: &'static str,
        reason: &'static str,
    },
    /// The base parameter set failed structural validation.
    Input(InputError),
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionError::InvalidDistributionParameters {
                distribution,
                reason,
            } => {
                write!(f, "invalid {distribution} distribution: {reason}")
            }
            DistributionError::Input(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DistributionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DistributionError::Input(e) => Some(e),
            DistributionError::InvalidDistributionParameters { .. } => None,
        }
    }
}

impl From<InputError> for DistributionError {
    fn from(e: InputError) -> Self {
        DistributionError::Input(e)
    }
}
