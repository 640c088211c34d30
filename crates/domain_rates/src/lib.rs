//! Benchmark Rates
//!
//! Market reference rates used to pre-fill calculator inputs. This crate is
//! a collaborator of the calculators, not part of them: no engine depends
//! on it.
//!
//! # Key Concepts
//!
//! - **Benchmark Rates**: Selic, CDI, IPCA and the derived savings rate, % a.a.
//! - **Rate Feed**: async port for any source of rates
//! - **Cached Feed**: TTL cache that falls back to stale values when the
//!   source fails

pub mod error;
pub mod feed;
pub mod rates;

pub use error::RateError;
pub use feed::{CachedRateFeed, RateFeed, StaticRateFeed, DEFAULT_CACHE_TTL_SECS};
pub use rates::{equivalent_monthly_rate, savings_rate, BenchmarkRates};
