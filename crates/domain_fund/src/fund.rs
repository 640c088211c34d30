//! Fund profile
//!
//! All rates on a profile are annual percentages, as shown on a fund's
//! factsheet (e.g. `1.5` for a 1.5% a.a. administration fee).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{monthly_rate_from_annual_percent, Currency};

use crate::error::FundError;

/// An investment fund and the fees it charges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundProfile {
    /// Display name, used to report the winner of a comparison
    pub name: String,
    /// Amount invested at month zero
    pub invested_amount: Decimal,
    /// Administration fee, % a.a., charged monthly on the balance
    pub annual_admin_fee_rate: Decimal,
    /// Performance fee, % of each month's positive gross gain
    pub annual_performance_fee_rate: Decimal,
    /// Expected gross return, % a.a.
    pub expected_annual_return: Decimal,
    pub currency: Currency,
}

impl FundProfile {
    /// Creates a fund profile with no fees
    ///
    /// # Arguments
    ///
    /// * `name` - Fund name
    /// * `invested_amount` - Amount invested
    /// * `expected_annual_return` - Expected gross return, % a.a.
    pub fn new(
        name: impl Into<String>,
        invested_amount: Decimal,
        expected_annual_return: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            invested_amount,
            annual_admin_fee_rate: Decimal::ZERO,
            annual_performance_fee_rate: Decimal::ZERO,
            expected_annual_return,
            currency: Currency::default(),
        }
    }

    /// Sets the administration fee (% a.a.)
    pub fn with_admin_fee(mut self, annual_percent: Decimal) -> Self {
        self.annual_admin_fee_rate = annual_percent;
        self
    }

    /// Sets the performance fee (% of gain)
    pub fn with_performance_fee(mut self, percent: Decimal) -> Self {
        self.annual_performance_fee_rate = percent;
        self
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Gross return per month, as a fraction
    pub fn monthly_return_rate(&self) -> Decimal {
        monthly_rate_from_annual_percent(self.expected_annual_return)
    }

    /// Administration fee per month, as a fraction
    pub fn monthly_admin_fee_rate(&self) -> Decimal {
        monthly_rate_from_annual_percent(self.annual_admin_fee_rate)
    }

    /// Performance fee as a fraction of the gain
    pub fn performance_fee_fraction(&self) -> Decimal {
        self.annual_performance_fee_rate / Decimal::ONE_HUNDRED
    }

    pub fn has_performance_fee(&self) -> bool {
        self.annual_performance_fee_rate > Decimal::ZERO
    }

    /// Checks the profile can be simulated
    pub fn validate(&self) -> Result<(), FundError> {
        if self.invested_amount <= Decimal::ZERO {
            return Err(FundError::InvalidProfile(format!(
                "{}: invested amount must be greater than zero",
                self.name
            )));
        }
        if self.annual_admin_fee_rate < Decimal::ZERO
            || self.annual_performance_fee_rate < Decimal::ZERO
        {
            return Err(FundError::InvalidProfile(format!(
                "{}: fee rates cannot be negative",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_profile_creation() {
        let fund = FundProfile::new("Fundo DI", dec!(10000), dec!(12))
            .with_admin_fee(dec!(1.2))
            .with_performance_fee(dec!(20));

        assert_eq!(fund.name, "Fundo DI");
        assert_eq!(fund.monthly_return_rate(), dec!(0.01));
        assert_eq!(fund.monthly_admin_fee_rate(), dec!(0.001));
        assert_eq!(fund.performance_fee_fraction(), dec!(0.2));
        assert!(fund.has_performance_fee());
        assert_eq!(fund.currency, Currency::BRL);
    }

    #[test]
    fn test_validation() {
        assert!(FundProfile::new("A", dec!(1), dec!(10)).validate().is_ok());
        assert!(FundProfile::new("B", dec!(0), dec!(10)).validate().is_err());
        assert!(FundProfile::new("C", dec!(100), dec!(10))
            .with_admin_fee(dec!(-0.5))
            .validate()
            .is_err());
    }
}
