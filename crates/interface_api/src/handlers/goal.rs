//! Goal planning handlers

use axum::Json;
use tracing::instrument;

use domain_goal::plan_goal;

use crate::dto::goal::*;
use crate::error::ApiError;
use crate::extract::ValidatedJson;

/// Solves for the monthly contribution needed to reach a goal
#[instrument(skip_all, fields(months = request.months_to_goal))]
pub async fn plan(
    ValidatedJson(request): ValidatedJson<GoalRequest>,
) -> Result<Json<GoalResponse>, ApiError> {
    let result = plan_goal(&request.to_input())?;
    Ok(Json(GoalResponse::from(&result)))
}
