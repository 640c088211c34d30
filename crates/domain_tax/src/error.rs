//! Tax domain errors

use thiserror::Error;

/// Errors that can occur in the tax domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("Invalid taxable event: {0}")]
    InvalidEvent(String),

    #[error("Tax out of range: {0}")]
    OutOfRange(String),
}
