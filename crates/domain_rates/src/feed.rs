//! Rate feed port and adapters
//!
//! The calculators never fetch rates themselves. Callers that want to pre-fill
//! a rate go through a [`RateFeed`], usually wrapped in a [`CachedRateFeed`] so
//! an unreachable source degrades to the last known values.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::error::RateError;
use crate::rates::BenchmarkRates;

/// Default time a fetched set of rates is considered fresh
pub const DEFAULT_CACHE_TTL_SECS: i64 = 24 * 60 * 60;

/// A source of current benchmark rates
#[async_trait]
pub trait RateFeed: Send + Sync {
    /// Returns the current rates
    async fn fetch(&self) -> Result<BenchmarkRates, RateError>;
}

#[async_trait]
impl<T: RateFeed + ?Sized> RateFeed for Arc<T> {
    async fn fetch(&self) -> Result<BenchmarkRates, RateError> {
        (**self).fetch().await
    }
}

/// Serves fixed, configured rates
#[derive(Debug, Clone, PartialEq)]
pub struct StaticRateFeed {
    selic: Decimal,
    cdi: Decimal,
    ipca: Decimal,
}

impl StaticRateFeed {
    pub fn new(selic: Decimal, cdi: Decimal, ipca: Decimal) -> Self {
        Self { selic, cdi, ipca }
    }
}

#[async_trait]
impl RateFeed for StaticRateFeed {
    async fn fetch(&self) -> Result<BenchmarkRates, RateError> {
        Ok(BenchmarkRates::new(self.selic, self.cdi, self.ipca, Utc::now()))
    }
}

/// Caches another feed's rates for a fixed time
///
/// - A fresh cached copy is served without calling the inner feed.
/// - An expired or empty cache triggers a fetch; successful results are stored.
/// - If that fetch fails, the cached copy is served with `is_stale` set.
/// - If it fails and nothing was ever cached, the error is returned.
#[derive(Debug)]
pub struct CachedRateFeed<F> {
    inner: F,
    ttl: Duration,
    cache: RwLock<Option<BenchmarkRates>>,
}

impl<F: RateFeed> CachedRateFeed<F> {
    /// Wraps `inner` with the default 24 hour TTL
    pub fn new(inner: F) -> Self {
        Self::with_ttl(inner, Duration::seconds(DEFAULT_CACHE_TTL_SECS))
    }

    pub fn with_ttl(inner: F, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: RwLock::new(None),
        }
    }

    /// Returns current rates, refreshing the cache when it has expired
    pub async fn current(&self) -> Result<BenchmarkRates, RateError> {
        self.current_at(Utc::now()).await
    }

    /// Same as [`current`](Self::current), evaluating freshness at `now`
    #[instrument(skip(self))]
    pub async fn current_at(&self, now: DateTime<Utc>) -> Result<BenchmarkRates, RateError> {
        if let Some(cached) = self.cache.read().await.as_ref() {
            if now - cached.fetched_at < self.ttl {
                debug!(fetched_at = %cached.fetched_at, "Serving cached rates");
                return Ok(cached.clone());
            }
        }

        match self.inner.fetch().await {
            Ok(rates) => {
                *self.cache.write().await = Some(rates.clone());
                debug!(selic = %rates.selic, cdi = %rates.cdi, "Rates refreshed");
                Ok(rates)
            }
            Err(error) => match self.cache.read().await.as_ref() {
                Some(cached) => {
                    warn!(%error, fetched_at = %cached.fetched_at, "Rate refresh failed, serving stale rates");
                    Ok(cached.clone().into_stale())
                }
                None => Err(RateError::NoRates(error.to_string())),
            },
        }
    }
}

#[async_trait]
impl<F: RateFeed> RateFeed for CachedRateFeed<F> {
    async fn fetch(&self) -> Result<BenchmarkRates, RateError> {
        self.current().await
    }
}
