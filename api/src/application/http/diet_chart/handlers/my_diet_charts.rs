use axum::extract::State;
use ayurdiet_core::domain::diet_chart::ports::DietChartService;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        diet_chart::handlers::list_diet_charts::ListDietChartsResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "/mine",
    tag = "diet-chart",
    summary = "List my diet charts",
    description = "Charts written for the calling patient account, matched by email.",
    responses(
        (status = 200, body = ListDietChartsResponse)
    ),
)]
pub async fn my_diet_charts(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<ListDietChartsResponse>, ApiError> {
    let charts = state
        .service
        .my_diet_charts(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListDietChartsResponse { data: charts }))
}
