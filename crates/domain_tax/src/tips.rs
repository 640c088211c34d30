//! Hints about holding an investment longer to pay less tax

use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::brackets::{regressive_bracket_index, IOF_FREE_FROM_DAY, REGRESSIVE_BRACKETS};
use crate::calculator::{TaxResult, TaxableEvent};

/// A way to reduce the tax on an event by waiting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaxTip {
    /// Waiting until IOF no longer applies
    IofWindow { days_to_wait: u32, iof_saved: Money },
    /// Waiting until the next, lower income tax bracket
    BracketStep {
        days_to_wait: u32,
        current_rate: Rate,
        next_rate: Rate,
    },
}

/// Derives tax tips from an event and its computed result
///
/// Events without a gain get no tips. Bracket tips start once the holding
/// period has left the first bracket.
pub fn optimization_tips(event: &TaxableEvent, result: &TaxResult) -> Vec<TaxTip> {
    let mut tips = Vec::new();
    if !result.gross_profit.is_positive() {
        return tips;
    }

    if event.holding_days < IOF_FREE_FROM_DAY {
        tips.push(TaxTip::IofWindow {
            days_to_wait: IOF_FREE_FROM_DAY - event.holding_days,
            iof_saved: result.transaction_tax_amount,
        });
    }

    if event.instrument_type.has_regressive_brackets() {
        let index = regressive_bracket_index(event.holding_days);
        let current = REGRESSIVE_BRACKETS[index];
        let next = REGRESSIVE_BRACKETS.get(index + 1);
        if let (true, Some(max_days), Some(next)) = (index > 0, current.max_days, next) {
            tips.push(TaxTip::BracketStep {
                days_to_wait: max_days + 1 - event.holding_days,
                current_rate: Rate::new(current.rate),
                next_rate: Rate::new(next.rate),
            });
        }
    }

    tips
}
