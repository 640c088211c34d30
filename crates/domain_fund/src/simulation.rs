//! Month-by-month fund simulation net of fees

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{apply_period, round_half_up, Money};

use crate::error::FundError;
use crate::fund::FundProfile;

/// Outcome of simulating a fund over a number of months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundSimulationResult {
    /// Balance after all fees
    pub final_amount: Money,
    /// `final_amount - invested_amount`
    pub total_return: Money,
    pub total_admin_fees: Money,
    pub total_performance_fees: Money,
    /// Net return over the whole horizon, in percent (2 decimal places)
    pub net_return_rate_percent: Decimal,
}

/// Running totals for one simulation
#[derive(Debug, Default)]
struct FeeLedger {
    balance: Decimal,
    admin_fees: Decimal,
    performance_fees: Decimal,
}

impl FeeLedger {
    /// Applies one month: growth, then the admin fee on the grown balance,
    /// then the performance fee on that month's gross gain.
    ///
    /// Returns `None` if any amount leaves the `Decimal` range.
    fn apply_month(&mut self, profile: &FundProfile) -> Option<()> {
        let grown = apply_period(self.balance, profile.monthly_return_rate(), Decimal::ZERO)?;
        let gross_gain = grown.checked_sub(self.balance)?;

        let admin_fee = grown.checked_mul(profile.monthly_admin_fee_rate())?;
        let mut balance = grown.checked_sub(admin_fee)?;
        self.admin_fees = self.admin_fees.checked_add(admin_fee)?;

        if profile.has_performance_fee() && gross_gain > Decimal::ZERO {
            let performance_fee = gross_gain.checked_mul(profile.performance_fee_fraction())?;
            balance = balance.checked_sub(performance_fee)?;
            self.performance_fees = self.performance_fees.checked_add(performance_fee)?;
        }

        self.balance = balance;
        Some(())
    }
}

/// Simulates a fund's balance over `months`, charging fees every month
///
/// The fee order within a month is fixed: gross growth is credited first,
/// the administration fee is charged on the post-growth balance, and the
/// performance fee is charged on the month's gross gain (only when positive).
///
/// # Errors
///
/// - [`FundError::InvalidProfile`] if the profile has no invested amount or a negative fee
/// - [`FundError::Overflow`] if the balance or a fee total leaves the `Decimal` range
pub fn simulate_fund(profile: &FundProfile, months: u32) -> Result<FundSimulationResult, FundError> {
    profile.validate()?;

    let mut ledger = FeeLedger {
        balance: profile.invested_amount,
        ..FeeLedger::default()
    };
    for month in 1..=months {
        ledger.apply_month(profile).ok_or(FundError::Overflow(month))?;
    }

    let currency = profile.currency;
    let final_amount = Money::rounded(ledger.balance, currency);
    let total_return = final_amount
        .amount()
        .checked_sub(profile.invested_amount)
        .ok_or(FundError::Overflow(months))?;
    let net_return_rate = ledger
        .balance
        .checked_sub(profile.invested_amount)
        .and_then(|net_return| net_return.checked_div(profile.invested_amount))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(FundError::Overflow(months))?;

    let result = FundSimulationResult {
        final_amount,
        total_return: Money::rounded(total_return, currency),
        total_admin_fees: Money::rounded(ledger.admin_fees, currency),
        total_performance_fees: Money::rounded(ledger.performance_fees, currency),
        net_return_rate_percent: round_half_up(net_return_rate, 2),
    };

    debug!(
        fund = %profile.name,
        months,
        final_amount = %result.final_amount,
        admin_fees = %result.total_admin_fees,
        performance_fees = %result.total_performance_fees,
        "Fund simulated"
    );
    Ok(result)
}
