use axum::extract::State;
use ayurdiet_core::domain::diet_chart::{entities::DietChart, ports::DietChartService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        diet_chart::validators::SaveDietChartValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveDietChartResponse {
    pub data: DietChart,
}

#[utoipa::path(
    post,
    path = "",
    tag = "diet-chart",
    summary = "Save diet chart",
    description = "Saves a weekly chart for one of the caller's patients. The start date defaults to today.",
    request_body = SaveDietChartValidator,
    responses(
        (status = 201, body = SaveDietChartResponse),
        (status = 400, description = "No patient selected, blank name or end date before start date"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "The patient belongs to another practitioner")
    ),
)]
pub async fn save_diet_chart(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SaveDietChartValidator>,
) -> Result<Response<SaveDietChartResponse>, ApiError> {
    let chart = state
        .service
        .save_diet_chart(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveDietChartResponse { data: chart }))
}
