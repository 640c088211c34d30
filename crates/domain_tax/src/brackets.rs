//! Rate tables
//!
//! Both tables are kept as ordered data rather than nested conditionals so
//! each threshold can be checked on its own.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Rate;

use crate::instrument::InstrumentType;

/// One row of the regressive income tax table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeTaxBracket {
    /// Last holding day covered by this bracket, `None` for the open-ended one
    pub max_days: Option<u32>,
    /// Rate applied to the gain
    pub rate: Decimal,
}

impl IncomeTaxBracket {
    fn covers(&self, holding_days: u32) -> bool {
        self.max_days.map_or(true, |max| holding_days <= max)
    }
}

/// Regressive income tax for fixed income and funds, ordered by holding period
pub const REGRESSIVE_BRACKETS: [IncomeTaxBracket; 4] = [
    IncomeTaxBracket { max_days: Some(180), rate: dec!(0.225) },
    IncomeTaxBracket { max_days: Some(360), rate: dec!(0.20) },
    IncomeTaxBracket { max_days: Some(720), rate: dec!(0.175) },
    IncomeTaxBracket { max_days: None, rate: dec!(0.15) },
];

/// Monthly stock sales at or below this amount are exempt from income tax
pub const STOCK_SALES_EXEMPTION_LIMIT: Decimal = dec!(20000);

/// Flat rate on stock gains once sales exceed the exemption limit
pub const STOCK_GAIN_RATE: Decimal = dec!(0.15);

/// Flat rate on day-trade gains
pub const DAY_TRADE_RATE: Decimal = dec!(0.20);

/// Holding period from which IOF no longer applies
pub const IOF_FREE_FROM_DAY: u32 = 30;

/// Regressive IOF schedule, in whole percent of the gain, for days 1 through 30
pub const IOF_PERCENT_BY_DAY: [u8; 30] = [
    96, 93, 90, 86, 83, 80, 76, 73, 70, 66,
    63, 60, 56, 53, 50, 46, 43, 40, 36, 33,
    30, 26, 23, 20, 16, 13, 10, 6, 3, 0,
];

/// Index of the regressive bracket covering `holding_days`
pub fn regressive_bracket_index(holding_days: u32) -> usize {
    REGRESSIVE_BRACKETS
        .iter()
        .position(|bracket| bracket.covers(holding_days))
        .unwrap_or(REGRESSIVE_BRACKETS.len() - 1)
}

/// Regressive income tax rate for a holding period
pub fn regressive_rate(holding_days: u32) -> Rate {
    Rate::new(REGRESSIVE_BRACKETS[regressive_bracket_index(holding_days)].rate)
}

/// Income tax rate for an instrument
///
/// `monthly_sales_volume` only matters for instruments with the sales exemption.
pub fn income_tax_rate(
    holding_days: u32,
    instrument: InstrumentType,
    monthly_sales_volume: Decimal,
) -> Rate {
    match instrument {
        InstrumentType::FixedIncome | InstrumentType::Fund => regressive_rate(holding_days),
        InstrumentType::Stock | InstrumentType::StockSwingTrade => {
            if monthly_sales_volume <= STOCK_SALES_EXEMPTION_LIMIT {
                Rate::ZERO
            } else {
                Rate::new(STOCK_GAIN_RATE)
            }
        }
        InstrumentType::StockDayTrade => Rate::new(DAY_TRADE_RATE),
    }
}

/// IOF rate for a holding period
///
/// A zero-day holding is charged as day one.
pub fn iof_rate(holding_days: u32) -> Rate {
    if holding_days >= IOF_FREE_FROM_DAY {
        return Rate::ZERO;
    }
    let day = holding_days.max(1) as usize;
    Rate::from_percentage(Decimal::from(IOF_PERCENT_BY_DAY[day - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regressive_table_is_ordered() {
        let limits: Vec<u32> = REGRESSIVE_BRACKETS.iter().filter_map(|b| b.max_days).collect();
        assert!(limits.windows(2).all(|w| w[0] < w[1]));
        assert!(REGRESSIVE_BRACKETS.windows(2).all(|w| w[0].rate > w[1].rate));
        assert_eq!(REGRESSIVE_BRACKETS.last().and_then(|b| b.max_days), None);
    }

    #[test]
    fn test_iof_table_is_non_increasing_and_ends_at_zero() {
        assert!(IOF_PERCENT_BY_DAY.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(IOF_PERCENT_BY_DAY[0], 96);
        assert_eq!(IOF_PERCENT_BY_DAY[29], 0);
    }

    #[test]
    fn test_zero_days_uses_day_one_iof() {
        assert_eq!(iof_rate(0), iof_rate(1));
        assert_eq!(iof_rate(0).as_decimal(), dec!(0.96));
    }

    #[test]
    fn test_bracket_index() {
        assert_eq!(regressive_bracket_index(0), 0);
        assert_eq!(regressive_bracket_index(180), 0);
        assert_eq!(regressive_bracket_index(181), 1);
        assert_eq!(regressive_bracket_index(721), 3);
        assert_eq!(regressive_bracket_index(u32::MAX), 3);
    }
}
