//! Growth DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Currency, LenientDecimal};
use domain_growth::{GrowthCheckpoint, GrowthInput, GrowthResult};

#[derive(Debug, Deserialize, Validate)]
pub struct GrowthRequest {
    pub initial_amount: LenientDecimal,
    pub monthly_contribution: LenientDecimal,
    /// Annual rate in percent, split evenly over twelve months
    pub annual_rate_percent: LenientDecimal,
    #[validate(range(max = 100))]
    pub years: u32,
    /// Also return the yearly chart checkpoints
    #[serde(default)]
    pub include_chart: bool,
    #[serde(default)]
    pub currency: Currency,
}

impl GrowthRequest {
    pub fn to_input(&self) -> GrowthInput {
        GrowthInput::from_annual_percent(
            self.initial_amount.value(),
            self.monthly_contribution.value(),
            self.annual_rate_percent.value(),
            self.years,
        )
        .with_currency(self.currency)
    }
}

#[derive(Debug, Serialize)]
pub struct GrowthResponse {
    pub future_value: Decimal,
    pub total_contributed: Decimal,
    pub total_growth: Decimal,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checkpoints: Vec<CheckpointResponse>,
}

#[derive(Debug, Serialize)]
pub struct CheckpointResponse {
    pub month: u32,
    pub future_value: Decimal,
    pub total_contributed: Decimal,
    pub total_growth: Decimal,
    pub growth_percent: Decimal,
}

impl From<&GrowthCheckpoint> for CheckpointResponse {
    fn from(checkpoint: &GrowthCheckpoint) -> Self {
        Self {
            month: checkpoint.period,
            future_value: checkpoint.future_value.amount(),
            total_contributed: checkpoint.total_contributed.amount(),
            total_growth: checkpoint.total_growth.amount(),
            growth_percent: checkpoint.growth_percent,
        }
    }
}

impl GrowthResponse {
    pub fn new(result: &GrowthResult, checkpoints: &[GrowthCheckpoint]) -> Self {
        Self {
            future_value: result.future_value.amount(),
            total_contributed: result.total_contributed.amount(),
            total_growth: result.total_growth.amount(),
            currency: result.future_value.currency(),
            checkpoints: checkpoints.iter().map(CheckpointResponse::from).collect(),
        }
    }
}
