//! Periodic-contribution compound growth
//!
//! The recurrence is applied once per period with full decimal precision;
//! rounding to centavos happens only when the result is built.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{
    apply_period, monthly_rate_from_annual_percent, CoreError, Currency, Money, MONTHS_PER_YEAR,
};

/// Inputs for a growth simulation
///
/// `periodic_rate` is a fraction per period (0.01 = 1% per period).
/// A negative `periodic_contribution` models withdrawals and is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Balance at period zero
    pub initial_amount: Decimal,
    /// Amount added at the end of every period
    pub periodic_contribution: Decimal,
    /// Growth rate per period, as a fraction
    pub periodic_rate: Decimal,
    /// Number of whole compounding periods
    pub number_of_periods: u32,
    /// Currency of the amounts
    pub currency: Currency,
}

impl GrowthInput {
    /// Creates a growth input in the default currency (BRL)
    pub fn new(
        initial_amount: Decimal,
        periodic_contribution: Decimal,
        periodic_rate: Decimal,
        number_of_periods: u32,
    ) -> Self {
        Self {
            initial_amount,
            periodic_contribution,
            periodic_rate,
            number_of_periods,
            currency: Currency::default(),
        }
    }

    /// Builds the monthly simulation used by the compound interest calculator
    ///
    /// The entered rate is treated as an annual percentage and split evenly
    /// across twelve months (`rate / 100 / 12`), and the term is given in years.
    pub fn from_annual_percent(
        initial_amount: Decimal,
        monthly_contribution: Decimal,
        annual_rate_percent: Decimal,
        years: u32,
    ) -> Self {
        Self::new(
            initial_amount,
            monthly_contribution,
            monthly_rate_from_annual_percent(annual_rate_percent),
            years.saturating_mul(MONTHS_PER_YEAR),
        )
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

/// Outcome of a growth simulation, rounded to the currency's minor unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Balance after the last period
    pub future_value: Money,
    /// Initial amount plus every contribution
    pub total_contributed: Money,
    /// `future_value - total_contributed`
    pub total_growth: Money,
}

/// Unrounded running totals of a simulation after `elapsed` periods
pub(crate) struct RunningTotals {
    pub(crate) balance: Decimal,
    pub(crate) contributed: Decimal,
    pub(crate) elapsed: u32,
}

impl RunningTotals {
    pub(crate) fn start(input: &GrowthInput) -> Self {
        Self {
            balance: input.initial_amount,
            contributed: input.initial_amount,
            elapsed: 0,
        }
    }

    /// Applies one more period of the recurrence
    pub(crate) fn advance(&mut self, input: &GrowthInput) -> Result<(), CoreError> {
        let period = self.elapsed + 1;
        self.balance = apply_period(self.balance, input.periodic_rate, input.periodic_contribution)
            .ok_or_else(|| out_of_range(period))?;
        self.contributed = self
            .contributed
            .checked_add(input.periodic_contribution)
            .ok_or_else(|| out_of_range(period))?;
        self.elapsed = period;
        Ok(())
    }

    /// Rounds the totals into a result
    pub(crate) fn to_result(&self, currency: Currency) -> Result<GrowthResult, CoreError> {
        let future_value = Money::rounded(self.balance, currency);
        let total_contributed = Money::rounded(self.contributed, currency);
        let total_growth = future_value
            .amount()
            .checked_sub(total_contributed.amount())
            .ok_or_else(|| out_of_range(self.elapsed))?;

        Ok(GrowthResult {
            future_value,
            total_contributed,
            total_growth: Money::new(total_growth, currency),
        })
    }
}

pub(crate) fn out_of_range(period: u32) -> CoreError {
    CoreError::invalid_input(format!(
        "balance exceeds the representable range at period {}",
        period
    ))
}

/// Simulates compound growth with a contribution at the end of every period
///
/// Each period applies `balance = balance × (1 + rate) + contribution`
/// while the contributed total accumulates in parallel.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] when a balance or total grows beyond
/// what a `Decimal` can hold.
///
/// # Example
///
/// ```rust
/// use domain_growth::{simulate_growth, GrowthInput};
/// use rust_decimal_macros::dec;
///
/// let input = GrowthInput::from_annual_percent(dec!(0), dec!(100), dec!(1), 1);
/// let result = simulate_growth(&input).unwrap();
///
/// assert_eq!(result.future_value.amount(), dec!(1205.52));
/// assert_eq!(result.total_contributed.amount(), dec!(1200));
/// assert_eq!(result.total_growth.amount(), dec!(5.52));
/// ```
pub fn simulate_growth(input: &GrowthInput) -> Result<GrowthResult, CoreError> {
    let mut totals = RunningTotals::start(input);
    for _ in 0..input.number_of_periods {
        totals.advance(input)?;
    }

    let result = totals.to_result(input.currency)?;
    debug!(
        periods = input.number_of_periods,
        future_value = %result.future_value,
        total_growth = %result.total_growth,
        "Growth simulated"
    );
    Ok(result)
}
