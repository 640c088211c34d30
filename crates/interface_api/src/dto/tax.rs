//! Tax DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Currency, LenientDecimal};
use domain_tax::{InstrumentType, TaxResult, TaxTip, TaxableEvent};

#[derive(Debug, Deserialize, Validate)]
pub struct TaxRequest {
    pub initial_amount: LenientDecimal,
    pub final_amount: LenientDecimal,
    #[validate(range(max = 36500))]
    pub holding_days: u32,
    pub instrument_type: InstrumentType,
    /// Only used for stock exemption checks
    #[serde(default)]
    pub monthly_sales_volume: LenientDecimal,
    #[serde(default)]
    pub currency: Currency,
}

impl TaxRequest {
    pub fn to_event(&self) -> TaxableEvent {
        TaxableEvent::new(
            self.initial_amount.value(),
            self.final_amount.value(),
            self.holding_days,
            self.instrument_type,
        )
        .with_monthly_sales_volume(self.monthly_sales_volume.value())
        .with_currency(self.currency)
    }
}

#[derive(Debug, Serialize)]
pub struct TaxResponse {
    pub gross_profit: Decimal,
    /// Income tax rate, in percent
    pub income_tax_rate: Decimal,
    /// IOF rate, in percent
    pub transaction_tax_rate: Decimal,
    pub income_tax_amount: Decimal,
    pub transaction_tax_amount: Decimal,
    pub total_tax: Decimal,
    pub net_amount: Decimal,
    pub net_profit: Decimal,
    pub is_exempt: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt_reason: Option<String>,
    pub annualized_return: Option<Decimal>,
    pub effective_return: Decimal,
    pub currency: Currency,
    pub tips: Vec<TaxTip>,
}

impl TaxResponse {
    pub fn new(result: TaxResult, tips: Vec<TaxTip>) -> Self {
        Self {
            gross_profit: result.gross_profit.amount(),
            income_tax_rate: result.income_tax_rate.as_percentage().normalize(),
            transaction_tax_rate: result.transaction_tax_rate.as_percentage().normalize(),
            income_tax_amount: result.income_tax_amount.amount(),
            transaction_tax_amount: result.transaction_tax_amount.amount(),
            total_tax: result.total_tax.amount(),
            net_amount: result.net_amount.amount(),
            net_profit: result.net_profit.amount(),
            is_exempt: result.is_exempt,
            exempt_reason: result.exempt_reason,
            annualized_return: result.annualized_return,
            effective_return: result.effective_return,
            currency: result.total_tax.currency(),
            tips,
        }
    }
}
