//! Fund DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Currency, LenientDecimal};
use domain_fund::{FundComparison, FundProfile, FundSimulationResult};

#[derive(Debug, Deserialize)]
pub struct FundProfileRequest {
    pub name: String,
    pub invested_amount: LenientDecimal,
    /// % a.a.
    #[serde(default)]
    pub admin_fee: LenientDecimal,
    /// % of monthly gross gain
    #[serde(default)]
    pub performance_fee: LenientDecimal,
    /// % a.a.
    pub expected_return: LenientDecimal,
    #[serde(default)]
    pub currency: Currency,
}

impl FundProfileRequest {
    pub fn to_profile(&self) -> FundProfile {
        FundProfile::new(
            self.name.clone(),
            self.invested_amount.value(),
            self.expected_return.value(),
        )
        .with_admin_fee(self.admin_fee.value())
        .with_performance_fee(self.performance_fee.value())
        .with_currency(self.currency)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct FundSimulationRequest {
    pub fund: FundProfileRequest,
    #[validate(range(max = 1200))]
    pub months: u32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct FundComparisonRequest {
    pub first: FundProfileRequest,
    pub second: FundProfileRequest,
    #[validate(range(max = 1200))]
    pub months: u32,
}

#[derive(Debug, Serialize)]
pub struct FundSimulationResponse {
    pub final_amount: Decimal,
    pub total_return: Decimal,
    pub total_admin_fees: Decimal,
    pub total_performance_fees: Decimal,
    pub net_return_rate_percent: Decimal,
    pub currency: Currency,
}

impl From<&FundSimulationResult> for FundSimulationResponse {
    fn from(result: &FundSimulationResult) -> Self {
        Self {
            final_amount: result.final_amount.amount(),
            total_return: result.total_return.amount(),
            total_admin_fees: result.total_admin_fees.amount(),
            total_performance_fees: result.total_performance_fees.amount(),
            net_return_rate_percent: result.net_return_rate_percent,
            currency: result.final_amount.currency(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FundComparisonResponse {
    pub first: FundSimulationResponse,
    pub second: FundSimulationResponse,
    pub winner: Option<String>,
    pub advantage: Decimal,
    pub months: u32,
}

impl From<&FundComparison> for FundComparisonResponse {
    fn from(comparison: &FundComparison) -> Self {
        Self {
            first: FundSimulationResponse::from(&comparison.first),
            second: FundSimulationResponse::from(&comparison.second),
            winner: comparison.winner.clone(),
            advantage: comparison.advantage.amount(),
            months: comparison.months,
        }
    }
}
