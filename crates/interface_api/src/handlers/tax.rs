//! Tax handlers

use axum::Json;
use tracing::instrument;

use domain_tax::{compute_tax, optimization_tips};

use crate::dto::tax::*;
use crate::error::ApiError;
use crate::extract::ValidatedJson;

/// Computes income tax and IOF on a redemption, with tips
#[instrument(skip_all, fields(instrument_type = ?request.instrument_type, days = request.holding_days))]
pub async fn calculate(
    ValidatedJson(request): ValidatedJson<TaxRequest>,
) -> Result<Json<TaxResponse>, ApiError> {
    let event = request.to_event();
    let result = compute_tax(&event)?;
    let tips = optimization_tips(&event, &result);

    Ok(Json(TaxResponse::new(result, tips)))
}
