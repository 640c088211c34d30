//! Goal domain errors

use thiserror::Error;

/// Errors that can occur while planning a goal
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalError {
    /// The target is already covered by the current amount
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
