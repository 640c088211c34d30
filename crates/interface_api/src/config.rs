//! API configuration

use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use domain_rates::DEFAULT_CACHE_TTL_SECS;

/// API configuration
///
/// Every field can be set from an `API_`-prefixed environment variable
/// (`API_PORT`, `API_SELIC_RATE`, ...); unset fields keep their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// How long fetched benchmark rates stay fresh
    pub rates_cache_ttl_secs: i64,
    /// Selic served by the static rate feed, % a.a.
    pub selic_rate: Decimal,
    /// CDI served by the static rate feed, % a.a.
    pub cdi_rate: Decimal,
    /// IPCA served by the static rate feed, % a.a.
    pub ipca_rate: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            rates_cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            selic_rate: dec!(10.50),
            cdi_rate: dec!(10.40),
            ipca_rate: dec!(4.50),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the rate cache TTL
    pub fn rates_cache_ttl(&self) -> Duration {
        Duration::seconds(self.rates_cache_ttl_secs)
    }
}
