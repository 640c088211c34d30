//! Growth checkpoints for charting
//!
//! A checkpoint schedule runs the same recurrence as [`simulate_growth`]
//! once and snapshots the running totals at selected periods.
//!
//! [`simulate_growth`]: crate::simulate_growth

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{round_half_up, CoreError, Money, MONTHS_PER_YEAR};

use crate::growth::{out_of_range, GrowthInput, RunningTotals};

/// Running totals at a given period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthCheckpoint {
    /// Number of periods elapsed
    pub period: u32,
    pub future_value: Money,
    pub total_contributed: Money,
    pub total_growth: Money,
    /// Growth as a percentage of the amount contributed so far
    pub growth_percent: Decimal,
}

/// Simulates growth and snapshots the totals at each requested period
///
/// Checkpoints are sorted and deduplicated; period zero reports the initial
/// amount and periods beyond `number_of_periods` are dropped.
///
/// # Errors
///
/// Fails like [`simulate_growth`](crate::simulate_growth) when the balance
/// leaves the `Decimal` range.
pub fn simulate_checkpoints(
    input: &GrowthInput,
    checkpoints: &[u32],
) -> Result<Vec<GrowthCheckpoint>, CoreError> {
    let mut wanted: Vec<u32> = checkpoints
        .iter()
        .copied()
        .filter(|period| *period <= input.number_of_periods)
        .collect();
    wanted.sort_unstable();
    wanted.dedup();

    let mut snapshots = Vec::with_capacity(wanted.len());
    let mut totals = RunningTotals::start(input);

    for target in wanted {
        while totals.elapsed < target {
            totals.advance(input)?;
        }
        snapshots.push(checkpoint(&totals, input)?);
    }

    Ok(snapshots)
}

fn checkpoint(totals: &RunningTotals, input: &GrowthInput) -> Result<GrowthCheckpoint, CoreError> {
    let result = totals.to_result(input.currency)?;
    let growth_percent = if totals.contributed.is_zero() {
        Decimal::ZERO
    } else {
        totals
            .balance
            .checked_sub(totals.contributed)
            .and_then(|growth| growth.checked_div(totals.contributed))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|percent| round_half_up(percent, 2))
            .ok_or_else(|| out_of_range(totals.elapsed))?
    };

    Ok(GrowthCheckpoint {
        period: totals.elapsed,
        future_value: result.future_value,
        total_contributed: result.total_contributed,
        total_growth: result.total_growth,
        growth_percent,
    })
}

/// Picks the yearly checkpoints shown on the growth chart for a horizon of `years`
///
/// ```rust
/// use domain_growth::chart_years;
///
/// assert_eq!(chart_years(10), vec![1, 2, 5, 10]);
/// assert_eq!(chart_years(20), vec![1, 5, 10, 15, 20]);
/// assert_eq!(chart_years(30), vec![1, 5, 10, 20, 30]);
/// ```
pub fn chart_years(years: u32) -> Vec<u32> {
    let candidates: &[u32] = if years <= 10 {
        &[1, 2, 5]
    } else if years <= 20 {
        &[1, 5, 10, 15]
    } else {
        &[1, 5, 10, 20]
    };

    let mut selected: Vec<u32> = candidates
        .iter()
        .copied()
        .chain(std::iter::once(years))
        .filter(|year| *year >= 1 && *year <= years)
        .collect();
    selected.sort_unstable();
    selected.dedup();
    selected
}

/// Converts yearly checkpoints into monthly period counts
pub fn years_to_periods(years: &[u32]) -> Vec<u32> {
    years.iter().map(|year| year.saturating_mul(MONTHS_PER_YEAR)).collect()
}
