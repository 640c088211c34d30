//! Fund domain errors

use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the fund domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FundError {
    #[error("Invalid fund profile: {0}")]
    InvalidProfile(String),

    #[error("Fund balance exceeds the representable range at month {0}")]
    Overflow(u32),

    #[error("Cannot compare funds: {0}")]
    Money(#[from] MoneyError),
}
