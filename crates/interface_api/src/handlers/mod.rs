//! Request handlers

pub mod fund;
pub mod goal;
pub mod growth;
pub mod health;
pub mod rates;
pub mod tax;
