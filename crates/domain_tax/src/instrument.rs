//! Instrument classification

use serde::{Deserialize, Serialize};

/// How an investment is taxed on redemption or sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentType {
    /// CDBs, treasury bonds and other fixed-income securities
    FixedIncome,
    /// Investment funds
    Fund,
    /// Common stock sold by an individual
    Stock,
    /// Stock bought and sold on different days
    StockSwingTrade,
    /// Stock bought and sold on the same day
    StockDayTrade,
}

impl InstrumentType {
    /// Whether income tax follows the regressive holding-period table
    pub fn has_regressive_brackets(&self) -> bool {
        matches!(self, InstrumentType::FixedIncome | InstrumentType::Fund)
    }

    /// Whether the monthly sales-volume exemption can apply
    pub fn has_sales_exemption(&self) -> bool {
        matches!(self, InstrumentType::Stock | InstrumentType::StockSwingTrade)
    }
}
