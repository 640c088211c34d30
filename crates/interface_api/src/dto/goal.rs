//! Goal DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Currency, LenientDecimal};
use domain_goal::{GoalInput, GoalResult, GoalScenario};

#[derive(Debug, Deserialize, Validate)]
pub struct GoalRequest {
    pub target_amount: LenientDecimal,
    #[serde(default)]
    pub current_amount: LenientDecimal,
    #[validate(range(min = 1, max = 1200))]
    pub months_to_goal: u32,
    /// % a.a.
    pub expected_annual_return: LenientDecimal,
    #[serde(default)]
    pub currency: Currency,
}

impl GoalRequest {
    pub fn to_input(&self) -> GoalInput {
        GoalInput::new(
            self.target_amount.value(),
            self.current_amount.value(),
            self.months_to_goal,
            self.expected_annual_return.value(),
        )
        .with_currency(self.currency)
    }
}

#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    pub offset_months: i32,
    pub months: u32,
    pub monthly_payment: Decimal,
    pub total_invested: Decimal,
}

impl From<&GoalScenario> for ScenarioResponse {
    fn from(scenario: &GoalScenario) -> Self {
        Self {
            offset_months: scenario.offset_months,
            months: scenario.months,
            monthly_payment: scenario.monthly_payment.amount(),
            total_invested: scenario.total_invested.amount(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub required_monthly_contribution: Decimal,
    pub total_to_be_invested: Decimal,
    pub future_value_of_current_amount: Decimal,
    pub alternate_scenarios: Vec<ScenarioResponse>,
    pub currency: Currency,
}

impl From<&GoalResult> for GoalResponse {
    fn from(result: &GoalResult) -> Self {
        Self {
            required_monthly_contribution: result.required_monthly_contribution.amount(),
            total_to_be_invested: result.total_to_be_invested.amount(),
            future_value_of_current_amount: result.future_value_of_current_amount.amount(),
            alternate_scenarios: result.alternate_scenarios.iter().map(ScenarioResponse::from).collect(),
            currency: result.required_monthly_contribution.currency(),
        }
    }
}
