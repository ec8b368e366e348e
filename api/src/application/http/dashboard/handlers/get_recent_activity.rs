use axum::extract::State;
use ayurdiet_core::domain::dashboard::{entities::RecentActivity, ports::DashboardService};
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
pub struct GetRecentActivityResponse {
    pub data: RecentActivity,
}

#[utoipa::path(
    get,
    path = "/recent-activity",
    tag = "dashboard",
    summary = "Get recent activity",
    description = "Up to four of the practice's newest patient registrations and diet charts, newest first.",
    responses(
        (status = 200, body = GetRecentActivityResponse)
    ),
)]
pub async fn get_recent_activity(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<GetRecentActivityResponse>, ApiError> {
    let activity = state
        .service
        .recent_activity(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecentActivityResponse { data: activity }))
}
