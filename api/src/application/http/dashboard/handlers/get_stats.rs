use axum::extract::State;
use ayurdiet_core::domain::dashboard::{entities::DashboardStats, ports::DashboardService};
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
pub struct GetStatsResponse {
    pub data: DashboardStats,
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "dashboard",
    summary = "Get dashboard stats",
    description = "Patient count of the caller's practice and the size of the food catalog.",
    responses(
        (status = 200, body = GetStatsResponse)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<GetStatsResponse>, ApiError> {
    let stats = state
        .service
        .dashboard_stats(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetStatsResponse { data: stats }))
}
