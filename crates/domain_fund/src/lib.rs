//! Fund Fee Domain
//!
//! This crate simulates how an investment fund's balance evolves once its
//! administration and performance fees are taken out, and compares funds
//! over the same horizon.
//!
//! # Key Concepts
//!
//! - **Fund Profile**: invested amount, expected return and fee rates (% a.a.)
//! - **Administration fee**: charged monthly on the balance after that month's growth
//! - **Performance fee**: a share of each month's positive gross gain
//! - **Comparison**: two profiles, one horizon, one winner
//!
//! # Fee Order
//!
//! Within a month: growth → administration fee → performance fee. With
//! R$ 10,000 at 12% a.a., 1.2% admin and 20% performance, month one is
//! 10,000 → 10,100 → 10,089.90 → 10,069.90.

pub mod comparison;
pub mod error;
pub mod fund;
pub mod simulation;

pub use comparison::{compare_funds, FundComparison};
pub use error::FundError;
pub use fund::FundProfile;
pub use simulation::{simulate_fund, FundSimulationResult};
