//! Compound growth handlers

use axum::Json;
use tracing::instrument;

use domain_growth::{chart_years, simulate_checkpoints, simulate_growth, years_to_periods};

use crate::dto::growth::*;
use crate::error::ApiError;
use crate::extract::ValidatedJson;

/// Simulates monthly contributions at an annual rate
#[instrument(skip_all, fields(years = request.years))]
pub async fn simulate(
    ValidatedJson(request): ValidatedJson<GrowthRequest>,
) -> Result<Json<GrowthResponse>, ApiError> {
    let input = request.to_input();
    let result = simulate_growth(&input)?;

    let checkpoints = if request.include_chart {
        simulate_checkpoints(&input, &years_to_periods(&chart_years(request.years)))?
    } else {
        Vec::new()
    };

    Ok(Json(GrowthResponse::new(&result, &checkpoints)))
}
