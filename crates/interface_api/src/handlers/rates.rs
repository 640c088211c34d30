//! Benchmark rate handlers

use axum::{extract::State, Json};
use tracing::instrument;

use domain_rates::RateFeed;

use crate::dto::rates::RatesResponse;
use crate::error::ApiError;
use crate::AppState;

/// Returns current benchmark rates, possibly stale
#[instrument(skip_all)]
pub async fn current(State(state): State<AppState>) -> Result<Json<RatesResponse>, ApiError> {
    let rates = state.rates.fetch().await?;
    Ok(Json(RatesResponse::from(rates)))
}
