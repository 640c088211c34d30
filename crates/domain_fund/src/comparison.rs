//! Side-by-side comparison of two funds

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::Money;

use crate::error::FundError;
use crate::fund::FundProfile;
use crate::simulation::{simulate_fund, FundSimulationResult};

/// Two funds simulated over the same horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundComparison {
    pub first: FundSimulationResult,
    pub second: FundSimulationResult,
    /// Name of the fund with the larger final amount, `None` on a tie
    pub winner: Option<String>,
    /// Difference between the two final amounts
    pub advantage: Money,
    pub months: u32,
}

/// Simulates both funds over `months` and reports which ends up ahead
///
/// Final amounts are compared after rounding to the currency's minor unit.
pub fn compare_funds(
    first: &FundProfile,
    second: &FundProfile,
    months: u32,
) -> Result<FundComparison, FundError> {
    let first_result = simulate_fund(first, months)?;
    let second_result = simulate_fund(second, months)?;

    let difference = first_result
        .final_amount
        .checked_sub(&second_result.final_amount)?;

    let winner = if difference.is_positive() {
        Some(first.name.clone())
    } else if difference.is_negative() {
        Some(second.name.clone())
    } else {
        None
    };

    debug!(months, winner = ?winner, advantage = %difference.abs(), "Funds compared");

    Ok(FundComparison {
        first: first_result,
        second: second_result,
        winner,
        advantage: difference.abs(),
        months,
    })
}
