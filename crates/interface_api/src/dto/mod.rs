//! Request and response bodies

pub mod fund;
pub mod goal;
pub mod growth;
pub mod rates;
pub mod tax;
