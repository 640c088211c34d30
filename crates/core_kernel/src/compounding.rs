//! Shared compounding primitive
//!
//! Every engine that grows a balance over time goes through the functions in
//! this module, so that growth simulations, fund simulations and goal
//! planning agree on what "one period of growth" means.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Number of compounding periods per year used by the monthly calculators
pub const MONTHS_PER_YEAR: u32 = 12;

/// Number of days used to annualize holding-period returns
pub const DAYS_PER_YEAR: u32 = 365;

/// Converts an annual percentage (e.g. `12.5` for 12.5% a.a.) into a simple
/// monthly fraction (`12.5 / 100 / 12`).
///
/// This is a nominal split, not the equivalent compounded monthly rate; see
/// [`equivalent_periodic_rate`] for the latter.
pub fn monthly_rate_from_annual_percent(annual_percent: Decimal) -> Decimal {
    annual_percent / dec!(100) / Decimal::from(MONTHS_PER_YEAR)
}

/// Applies one period of growth followed by a contribution:
/// `balance × (1 + rate) + contribution`, or `None` if the result overflows.
pub fn apply_period(balance: Decimal, rate: Decimal, contribution: Decimal) -> Option<Decimal> {
    balance
        .checked_mul(Decimal::ONE.checked_add(rate)?)?
        .checked_add(contribution)
}

/// Returns `(1 + rate)^periods`, or `None` if the result overflows.
pub fn growth_factor(rate: Decimal, periods: u32) -> Option<Decimal> {
    Decimal::ONE.checked_add(rate)?.checked_powu(u64::from(periods))
}

/// Future value of one unit contributed at the end of each period:
/// `((1 + rate)^periods - 1) / rate`, or `periods` when the rate is zero.
pub fn annuity_factor(rate: Decimal, periods: u32) -> Option<Decimal> {
    if rate.is_zero() {
        return Some(Decimal::from(periods));
    }
    let factor = growth_factor(rate, periods)?;
    factor.checked_sub(Decimal::ONE)?.checked_div(rate)
}

/// Compounds `rate` over a fractional number of periods: `(1 + rate)^exponent - 1`.
///
/// Used to annualize a holding-period return (`exponent = 365 / days`) and to
/// derive an equivalent monthly rate from an annual one (`exponent = 1 / 12`).
pub fn equivalent_periodic_rate(rate: Decimal, exponent: Decimal) -> Option<Decimal> {
    let base = Decimal::ONE.checked_add(rate)?;
    if base <= Decimal::ZERO {
        return None;
    }
    base.checked_powd(exponent).map(|value| value - Decimal::ONE)
}
