use axum::extract::State;
use ayurdiet_core::domain::dashboard::{entities::DoshaDistribution, ports::DashboardService};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{
    auth::OptionalIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetDoshaDistributionResponse {
    pub data: DoshaDistribution,
}

#[utoipa::path(
    get,
    path = "/dosha-distribution",
    tag = "dashboard",
    summary = "Get dosha distribution",
    description = "Share of the caller's patients per dominant dosha. Falls back to an even sample split when there is nothing to count.",
    responses(
        (status = 200, body = GetDoshaDistributionResponse)
    ),
)]
pub async fn get_dosha_distribution(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<GetDoshaDistributionResponse>, ApiError> {
    let distribution = state
        .service
        .dosha_distribution(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDoshaDistributionResponse { data: distribution }))
}
