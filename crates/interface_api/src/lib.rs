//! HTTP API Layer
//!
//! This crate exposes the investment calculators as JSON endpoints using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one module per calculator, each a thin call into its engine
//! - **DTOs**: request bodies accept numbers or numeric strings; responses are flat
//! - **Middleware**: request logging, tracing, CORS
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_rates::{CachedRateFeed, RateFeed, StaticRateFeed};

use crate::config::ApiConfig;
use crate::handlers::{fund, goal, growth, health, rates, tax};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub rates: Arc<dyn RateFeed>,
}

/// Creates the main API router
///
/// Benchmark rates come from the configured static values behind a cache.
pub fn create_router(config: ApiConfig) -> Router {
    let feed = CachedRateFeed::with_ttl(
        StaticRateFeed::new(config.selic_rate, config.cdi_rate, config.ipca_rate),
        config.rates_cache_ttl(),
    );
    create_router_with_feed(config, Arc::new(feed))
}

/// Creates the main API router with a custom rate feed
///
/// # Arguments
///
/// * `config` - API configuration
/// * `rates` - Source of benchmark rates for `/api/v1/rates`
pub fn create_router_with_feed(config: ApiConfig, rates: Arc<dyn RateFeed>) -> Router {
    let state = AppState { config, rates };

    let public_routes = Router::new().route("/health", get(health::health_check));

    let calculator_routes = Router::new()
        .route("/growth", post(growth::simulate))
        .route("/tax", post(tax::calculate))
        .route("/funds", post(fund::simulate))
        .route("/funds/compare", post(fund::compare))
        .route("/goal", post(goal::plan));

    let api_routes = Router::new()
        .nest("/calculators", calculator_routes)
        .route("/rates", get(rates::current))
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
