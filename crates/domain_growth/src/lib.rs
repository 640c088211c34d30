//! Compound Growth Domain
//!
//! This crate simulates how a balance grows when it earns a fixed rate per
//! period and receives a fixed contribution at the end of each period.
//!
//! # Key Concepts
//!
//! - **Growth Input**: initial amount, periodic contribution, periodic rate, term
//! - **Growth Result**: future value, total contributed, total growth
//! - **Checkpoints**: intermediate snapshots of the same simulation for charts
//!
//! # Rounding
//!
//! Balances are carried at full decimal precision for every period and only
//! rounded to centavos when a result is produced:
//! - 12 × R$ 100 at 1% a.a. (0.0833% a.m.) = R$ 1,205.515306... → R$ 1,205.52

pub mod growth;
pub mod schedule;

pub use growth::{simulate_growth, GrowthInput, GrowthResult};
pub use schedule::{chart_years, simulate_checkpoints, years_to_periods, GrowthCheckpoint};
