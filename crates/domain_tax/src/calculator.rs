//! Tax computation for a single redemption or sale

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{equivalent_periodic_rate, round_half_up, Currency, Money, Rate, DAYS_PER_YEAR};

use crate::brackets::{income_tax_rate, iof_rate, STOCK_SALES_EXEMPTION_LIMIT};
use crate::error::TaxError;
use crate::instrument::InstrumentType;

/// Decimal places kept on return ratios
const RETURN_DECIMAL_PLACES: u32 = 6;

/// A redemption or sale to be taxed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxableEvent {
    /// Amount originally invested
    pub initial_amount: Decimal,
    /// Amount received on redemption or sale, before taxes
    pub final_amount: Decimal,
    /// Days between investing and redeeming
    pub holding_days: u32,
    pub instrument_type: InstrumentType,
    /// Total stock sales in the month, only used for the exemption threshold
    pub monthly_sales_volume: Decimal,
    pub currency: Currency,
}

impl TaxableEvent {
    /// Creates an event with no monthly sales volume, in BRL
    pub fn new(
        initial_amount: Decimal,
        final_amount: Decimal,
        holding_days: u32,
        instrument_type: InstrumentType,
    ) -> Self {
        Self {
            initial_amount,
            final_amount,
            holding_days,
            instrument_type,
            monthly_sales_volume: Decimal::ZERO,
            currency: Currency::default(),
        }
    }

    /// Sets the month's total stock sales
    pub fn with_monthly_sales_volume(mut self, volume: Decimal) -> Self {
        self.monthly_sales_volume = volume;
        self
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// `final_amount - initial_amount`, unrounded
    pub fn gross_profit(&self) -> Decimal {
        self.final_amount - self.initial_amount
    }

    fn validate(&self) -> Result<(), TaxError> {
        if self.initial_amount <= Decimal::ZERO {
            return Err(TaxError::InvalidEvent(
                "initial amount must be greater than zero".to_string(),
            ));
        }
        if self.final_amount < Decimal::ZERO {
            return Err(TaxError::InvalidEvent(
                "final amount cannot be negative".to_string(),
            ));
        }
        if self.monthly_sales_volume < Decimal::ZERO {
            return Err(TaxError::InvalidEvent(
                "monthly sales volume cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Taxes due on a [`TaxableEvent`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    pub gross_profit: Money,
    pub income_tax_rate: Rate,
    pub transaction_tax_rate: Rate,
    pub income_tax_amount: Money,
    pub transaction_tax_amount: Money,
    /// Income tax plus IOF
    pub total_tax: Money,
    /// Amount received after taxes
    pub net_amount: Money,
    pub net_profit: Money,
    /// True when the income tax rate is zero on a gain
    pub is_exempt: bool,
    pub exempt_reason: Option<String>,
    /// `(final / initial)^(365 / days) - 1`, `None` when it cannot be represented
    pub annualized_return: Option<Decimal>,
    /// `net_profit / initial_amount`
    pub effective_return: Decimal,
}

impl TaxResult {
    /// Result for an event without a gain: nothing is taxed
    fn no_gain(event: &TaxableEvent) -> Self {
        let currency = event.currency;
        let gross_profit = Money::rounded(event.gross_profit(), currency);
        Self {
            gross_profit,
            income_tax_rate: Rate::ZERO,
            transaction_tax_rate: Rate::ZERO,
            income_tax_amount: Money::zero(currency),
            transaction_tax_amount: Money::zero(currency),
            total_tax: Money::zero(currency),
            net_amount: Money::rounded(event.final_amount, currency),
            net_profit: gross_profit,
            is_exempt: false,
            exempt_reason: None,
            annualized_return: Some(Decimal::ZERO),
            effective_return: Decimal::ZERO,
        }
    }
}

/// Computes income tax and IOF on an investment gain
///
/// Both taxes apply to the gross profit at the same time. Events without a
/// gain are never taxed and report zero rates.
///
/// # Errors
///
/// Returns [`TaxError::InvalidEvent`] when the initial amount is not positive
/// or the final amount or sales volume is negative, and
/// [`TaxError::OutOfRange`] when the gain is too large to tax.
///
/// # Example
///
/// ```rust
/// use domain_tax::{compute_tax, InstrumentType, TaxableEvent};
/// use rust_decimal_macros::dec;
///
/// let event = TaxableEvent::new(dec!(10000), dec!(11000), 180, InstrumentType::FixedIncome);
/// let result = compute_tax(&event).unwrap();
///
/// assert_eq!(result.income_tax_amount.amount(), dec!(225));
/// assert_eq!(result.net_amount.amount(), dec!(10775));
/// ```
pub fn compute_tax(event: &TaxableEvent) -> Result<TaxResult, TaxError> {
    event.validate()?;

    let gross_profit = event.gross_profit();
    if gross_profit <= Decimal::ZERO {
        debug!(gross_profit = %gross_profit, "No gain, nothing to tax");
        return Ok(TaxResult::no_gain(event));
    }

    let currency = event.currency;
    let ir_rate = income_tax_rate(
        event.holding_days,
        event.instrument_type,
        event.monthly_sales_volume,
    );
    let iof = iof_rate(event.holding_days);

    let income_tax_amount = Money::rounded(ir_rate.apply(gross_profit), currency);
    let transaction_tax_amount = Money::rounded(iof.apply(gross_profit), currency);
    let total_tax = income_tax_amount
        .amount()
        .checked_add(transaction_tax_amount.amount())
        .map(|amount| Money::new(amount, currency))
        .ok_or_else(out_of_range)?;

    let gross_profit = Money::rounded(gross_profit, currency);
    let net_profit = gross_profit - total_tax;
    let net_amount = Money::rounded(event.final_amount, currency) - total_tax;
    let effective_return = net_profit
        .amount()
        .checked_div(event.initial_amount)
        .ok_or_else(out_of_range)?;

    let is_exempt = ir_rate.is_zero();
    let exempt_reason = (is_exempt && event.instrument_type.has_sales_exemption()).then(|| {
        format!(
            "Monthly stock sales up to {} are exempt from income tax",
            Money::new(STOCK_SALES_EXEMPTION_LIMIT, currency)
        )
    });

    let result = TaxResult {
        gross_profit,
        income_tax_rate: ir_rate,
        transaction_tax_rate: iof,
        income_tax_amount,
        transaction_tax_amount,
        total_tax,
        net_amount,
        net_profit,
        is_exempt,
        exempt_reason,
        annualized_return: annualized_return(event),
        effective_return: round_half_up(effective_return, RETURN_DECIMAL_PLACES),
    };

    debug!(
        instrument = ?event.instrument_type,
        holding_days = event.holding_days,
        income_tax_rate = %result.income_tax_rate,
        iof_rate = %result.transaction_tax_rate,
        total_tax = %result.total_tax,
        "Tax computed"
    );
    Ok(result)
}

fn out_of_range() -> TaxError {
    TaxError::OutOfRange("tax amounts exceed the representable range".to_string())
}

/// Compounds the gross holding-period return to a 365-day year
fn annualized_return(event: &TaxableEvent) -> Option<Decimal> {
    let days = Decimal::from(event.holding_days.max(1));
    let holding_return = event.final_amount.checked_div(event.initial_amount)? - Decimal::ONE;
    let exponent = Decimal::from(DAYS_PER_YEAR) / days;
    equivalent_periodic_rate(holding_return, exponent)
        .map(|rate| round_half_up(rate, RETURN_DECIMAL_PLACES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rejects_non_positive_initial_amount() {
        let event = TaxableEvent::new(dec!(0), dec!(100), 10, InstrumentType::FixedIncome);
        assert!(matches!(compute_tax(&event), Err(TaxError::InvalidEvent(_))));
    }

    #[test]
    fn test_gain_too_large_to_tax_is_out_of_range() {
        // IOF plus IR on a one-day gain near Decimal::MAX exceeds the range
        let event = TaxableEvent::new(dec!(1), Decimal::MAX, 1, InstrumentType::FixedIncome);
        assert!(matches!(compute_tax(&event), Err(TaxError::OutOfRange(_))));
    }

    #[test]
    fn test_tiny_initial_amount_is_out_of_range() {
        let event = TaxableEvent::new(
            dec!(0.0000001),
            dec!(1000000000000000000000000),
            400,
            InstrumentType::FixedIncome,
        );
        assert!(matches!(compute_tax(&event), Err(TaxError::OutOfRange(_))));
    }

    #[test]
    fn test_rejects_negative_sales_volume() {
        let event = TaxableEvent::new(dec!(100), dec!(110), 10, InstrumentType::Stock)
            .with_monthly_sales_volume(dec!(-1));
        assert!(compute_tax(&event).is_err());
    }

    #[test]
    fn test_break_even_is_not_taxed() {
        let event = TaxableEvent::new(dec!(5000), dec!(5000), 3, InstrumentType::Fund);
        let result = compute_tax(&event).unwrap();

        assert!(result.total_tax.is_zero());
        assert!(result.transaction_tax_rate.is_zero());
        assert!(!result.is_exempt);
        assert_eq!(result.net_amount.amount(), dec!(5000));
    }

    #[test]
    fn test_year_long_holding_annualizes_to_holding_return() {
        let event = TaxableEvent::new(dec!(10000), dec!(11000), 365, InstrumentType::FixedIncome);
        let result = compute_tax(&event).unwrap();

        let annualized = result.annualized_return.unwrap();
        assert!((annualized - dec!(0.1)).abs() <= dec!(0.000001));
        assert_eq!(result.effective_return, dec!(0.0825));
    }
}
