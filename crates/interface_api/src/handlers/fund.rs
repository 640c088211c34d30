//! Fund fee handlers

use axum::Json;
use tracing::instrument;

use domain_fund::{compare_funds, simulate_fund};

use crate::dto::fund::*;
use crate::error::ApiError;
use crate::extract::ValidatedJson;

/// Simulates one fund net of fees
#[instrument(skip_all, fields(fund = %request.fund.name, months = request.months))]
pub async fn simulate(
    ValidatedJson(request): ValidatedJson<FundSimulationRequest>,
) -> Result<Json<FundSimulationResponse>, ApiError> {
    let result = simulate_fund(&request.fund.to_profile(), request.months)?;
    Ok(Json(FundSimulationResponse::from(&result)))
}

/// Compares two funds over the same horizon
#[instrument(skip_all, fields(months = request.months))]
pub async fn compare(
    ValidatedJson(request): ValidatedJson<FundComparisonRequest>,
) -> Result<Json<FundComparisonResponse>, ApiError> {
    let comparison = compare_funds(
        &request.first.to_profile(),
        &request.second.to_profile(),
        request.months,
    )?;
    Ok(Json(FundComparisonResponse::from(&comparison)))
}
