use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Economic parameters for a single plant profitability analysis.
///
/// Monetary values share one currency; rates are decimal fractions
/// (0.12 = 12%). Parameters are immutable for the duration of an analysis
/// run; perturbation (sensitivity, Monte Carlo) always works on a clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    /// Total capital investment at year 0. Must be positive.
    pub capital_investment: f64,
    pub annual_revenue: f64,
    pub annual_operating_costs: f64,
    /// Operating lifetime in years.
    pub project_lifetime: u32,
    /// Discount rate used for NPV. Must be greater than -1.
    pub discount_rate: f64,
    /// Corporate tax rate.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    /// Equipment salvage value recovered in the final year.
    /// Must lie between 0 and the capital investment.
    #[serde(default)]
    pub salvage_value: f64,
}

fn default_tax_rate() -> f64 {
    0.30
}

impl ProjectParameters {
    /// Structural validation, applied before any computation.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.capital_investment <= 0.0 {
            return Err(InputError::NonPositiveCapitalInvestment(
                self.capital_investment,
            ));
        }
        if self.project_lifetime == 0 {
            return Err(InputError::ZeroProjectLifetime);
        }
        if self.discount_rate <= -1.0 {
            return Err(InputError::DiscountRateOutOfRange(self.discount_rate));
        }
        if self.annual_revenue < 0.0 {
            return Err(InputError::NegativeAnnualRevenue(self.annual_revenue));
        }
        if self.annual_operating_costs < 0.0 {
            return Err(InputError::NegativeAnnualOperatingCosts(
                self.annual_operating_costs,
            ));
        }
        if self.salvage_value < 0.0 || self.salvage_value > self.capital_investment {
            return Err(InputError::SalvageOutOfRange {
                salvage_value: self.salvage_value,
                capital_investment: self.capital_investment,
            });
        }
        Ok(())
    }

    /// Straight-line annual depreciation over the project lifetime.
    ///
    /// Only meaningful for validated parameters (`project_lifetime >= 1`).
    #[must_use]
    pub fn annual_depreciation(&self) -> f64 {
        (self.capital_investment - self.salvage_value) / f64::from(self.project_lifetime)
    }

    /// Annual gross profit before depreciation and taxes.
    #[must_use]
    pub fn annual_gross_profit(&self) -> f64 {
        self.annual_revenue - self.annual_operating_costs
    }
}

/// A perturbable field of [`ProjectParameters`].
///
/// Sensitivity ranges and Monte-Carlo distributions address parameters
/// through this enum rather than by string key, so a typo in a parameter
/// name is a compile error instead of a silently skipped row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    CapitalInvestment,
    AnnualRevenue,
    AnnualOperatingCosts,
    ProjectLifetime,
    DiscountRate,
    TaxRate,
    SalvageValue,
}

impl Parameter {
    pub const ALL: [Parameter; 7] = [
        Parameter::CapitalInvestment,
        Parameter::AnnualRevenue,
        Parameter::AnnualOperatingCosts,
        Parameter::ProjectLifetime,
        Parameter::DiscountRate,
        Parameter::TaxRate,
        Parameter::SalvageValue,
    ];

    /// Display label for tables and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Parameter::CapitalInvestment => "Capital Investment",
            Parameter::AnnualRevenue => "Annual Revenue",
            Parameter::AnnualOperatingCosts => "Annual Operating Costs",
            Parameter::ProjectLifetime => "Project Lifetime",
            Parameter::DiscountRate => "Discount Rate",
            Parameter::TaxRate => "Tax Rate",
            Parameter::SalvageValue => "Salvage Value",
        }
    }

    /// Current value of this parameter in `params`.
    #[must_use]
    pub fn value_in(self, params: &ProjectParameters) -> f64 {
        match self {
            Parameter::CapitalInvestment => params.capital_investment,
            Parameter::AnnualRevenue => params.annual_revenue,
            Parameter::AnnualOperatingCosts => params.annual_operating_costs,
            Parameter::ProjectLifetime => f64::from(params.project_lifetime),
            Parameter::DiscountRate => params.discount_rate,
            Parameter::TaxRate => params.tax_rate,
            Parameter::SalvageValue => params.salvage_value,
        }
    }

    /// Write `value` into `params`.
    ///
    /// The project lifetime is an integer year count, so it rounds to the
    /// nearest year and floors at one.
    pub fn apply_to(self, params: &mut ProjectParameters, value: f64) {
        match self {
            Parameter::CapitalInvestment => params.capital_investment = value,
            Parameter::AnnualRevenue => params.annual_revenue = value,
            Parameter::AnnualOperatingCosts => params.annual_operating_costs = value,
            Parameter::ProjectLifetime => {
                params.project_lifetime = value.round().max(1.0) as u32;
            }
            Parameter::DiscountRate => params.discount_rate = value,
            Parameter::TaxRate => params.tax_rate = value,
            Parameter::SalvageValue => params.salvage_value = value,
        }
    }
}
