//! Closed-form goal planning
//!
//! The required contribution solves the annuity equation directly instead of
//! iterating month by month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{annuity_factor, growth_factor, monthly_rate_from_annual_percent, Currency, Money};

use crate::error::GoalError;

/// Month offsets of the alternate timelines, relative to the chosen one
pub const SCENARIO_OFFSETS: [i32; 4] = [-6, 0, 6, 12];

/// What the investor wants to reach, and by when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalInput {
    pub target_amount: Decimal,
    /// Amount already saved, invested at the same return
    pub current_amount: Decimal,
    pub months_to_goal: u32,
    /// Expected return, % a.a.
    pub expected_annual_return: Decimal,
    pub currency: Currency,
}

impl GoalInput {
    pub fn new(
        target_amount: Decimal,
        current_amount: Decimal,
        months_to_goal: u32,
        expected_annual_return: Decimal,
    ) -> Self {
        Self {
            target_amount,
            current_amount,
            months_to_goal,
            expected_annual_return,
            currency: Currency::default(),
        }
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

/// The same goal reached over a different number of months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalScenario {
    /// Shift applied to `months_to_goal`
    pub offset_months: i32,
    pub months: u32,
    pub monthly_payment: Money,
    /// `monthly_payment × months + current_amount`
    pub total_invested: Money,
}

/// Plan to reach a [`GoalInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    /// Never negative; zero when the current amount already grows past the target
    pub required_monthly_contribution: Money,
    pub total_to_be_invested: Money,
    pub future_value_of_current_amount: Money,
    pub alternate_scenarios: Vec<GoalScenario>,
}

/// Unrounded solution for one timeline
struct Solution {
    monthly_payment: Decimal,
    future_value_of_current: Decimal,
}

fn solve(input: &GoalInput, monthly_rate: Decimal, months: u32) -> Result<Solution, GoalError> {
    let overflow = || GoalError::InvalidInput(format!("{} months is too long a horizon", months));

    let future_value_of_current = growth_factor(monthly_rate, months)
        .and_then(|factor| input.current_amount.checked_mul(factor))
        .ok_or_else(overflow)?;
    let adjusted_target = input
        .target_amount
        .checked_sub(future_value_of_current)
        .ok_or_else(overflow)?;

    let factor = annuity_factor(monthly_rate, months).ok_or_else(overflow)?;
    if factor.is_zero() {
        return Err(GoalError::InvalidInput(format!(
            "monthly contributions add nothing over {} months at this rate",
            months
        )));
    }
    let payment = adjusted_target.checked_div(factor).ok_or_else(overflow)?;

    Ok(Solution {
        monthly_payment: payment.max(Decimal::ZERO),
        future_value_of_current,
    })
}

fn total_invested(
    payment: Decimal,
    months: u32,
    current_amount: Decimal,
) -> Result<Decimal, GoalError> {
    payment
        .checked_mul(Decimal::from(months))
        .and_then(|contributions| contributions.checked_add(current_amount))
        .ok_or_else(|| GoalError::InvalidInput(format!("{} months is too long a horizon", months)))
}

/// Solves for the monthly contribution needed to reach the target
///
/// # Errors
///
/// - [`GoalError::InvalidGoal`] when the target is not above the current amount
/// - [`GoalError::InvalidInput`] when the horizon is zero months, too long to
///   compute, or the rate makes monthly contributions sum to nothing
pub fn plan_goal(input: &GoalInput) -> Result<GoalResult, GoalError> {
    if input.target_amount <= input.current_amount {
        return Err(GoalError::InvalidGoal(
            "target amount must be greater than the current amount".to_string(),
        ));
    }
    if input.current_amount < Decimal::ZERO {
        return Err(GoalError::InvalidInput(
            "current amount cannot be negative".to_string(),
        ));
    }
    if input.months_to_goal == 0 {
        return Err(GoalError::InvalidInput(
            "months to goal must be at least 1".to_string(),
        ));
    }

    let currency = input.currency;
    let monthly_rate = monthly_rate_from_annual_percent(input.expected_annual_return);
    let chosen = solve(input, monthly_rate, input.months_to_goal)?;

    let mut alternate_scenarios = Vec::with_capacity(SCENARIO_OFFSETS.len());
    for offset in SCENARIO_OFFSETS {
        let months = i64::from(input.months_to_goal) + i64::from(offset);
        let Ok(months) = u32::try_from(months) else {
            continue;
        };
        if months == 0 {
            continue;
        }
        let solution = solve(input, monthly_rate, months)?;
        alternate_scenarios.push(GoalScenario {
            offset_months: offset,
            months,
            monthly_payment: Money::rounded(solution.monthly_payment, currency),
            total_invested: Money::rounded(
                total_invested(solution.monthly_payment, months, input.current_amount)?,
                currency,
            ),
        });
    }

    let result = GoalResult {
        required_monthly_contribution: Money::rounded(chosen.monthly_payment, currency),
        total_to_be_invested: Money::rounded(
            total_invested(chosen.monthly_payment, input.months_to_goal, input.current_amount)?,
            currency,
        ),
        future_value_of_current_amount: Money::rounded(chosen.future_value_of_current, currency),
        alternate_scenarios,
    };

    debug!(
        months = input.months_to_goal,
        required = %result.required_monthly_contribution,
        scenarios = result.alternate_scenarios.len(),
        "Goal planned"
    );
    Ok(result)
}
