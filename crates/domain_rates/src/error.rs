//! Rate feed errors

use thiserror::Error;

/// Errors that can occur while obtaining benchmark rates
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RateError {
    /// The upstream source could not be reached or returned bad data
    #[error("Rate source unavailable: {0}")]
    Unavailable(String),

    /// The source failed and there is no cached copy to fall back on
    #[error("No benchmark rates available: {0}")]
    NoRates(String),
}
