//! Goal Planning Domain
//!
//! This crate answers "how much do I need to invest every month to reach
//! R$ X in N months?" given what is already saved and an expected return.
//!
//! # Key Concepts
//!
//! - **Goal Input**: target, current amount, horizon in months, return % a.a.
//! - **Required contribution**: closed-form annuity solution, floored at zero
//! - **Alternate scenarios**: the same goal six months sooner, and six and
//!   twelve months later
//!
//! # Example
//!
//! ```rust
//! use domain_goal::{plan_goal, GoalInput};
//! use rust_decimal_macros::dec;
//!
//! let plan = plan_goal(&GoalInput::new(dec!(30000), dec!(5000), 24, dec!(12))).unwrap();
//! assert_eq!(plan.required_monthly_contribution.amount(), dec!(876.84));
//! ```

pub mod error;
pub mod plan;

pub use error::GoalError;
pub use plan::{plan_goal, GoalInput, GoalResult, GoalScenario, SCENARIO_OFFSETS};
