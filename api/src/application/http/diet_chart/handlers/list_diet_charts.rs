use axum::extract::{Query, State};
use ayurdiet_core::domain::diet_chart::{entities::DietChart, ports::DietChartService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        diet_chart::validators::ListDietChartsParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListDietChartsResponse {
    pub data: Vec<DietChart>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "diet-chart",
    summary = "List diet charts",
    description = "Lists the caller's charts, newest first, optionally for a single patient.",
    params(ListDietChartsParams),
    responses(
        (status = 200, body = ListDietChartsResponse)
    ),
)]
pub async fn list_diet_charts(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Query(params): Query<ListDietChartsParams>,
) -> Result<Response<ListDietChartsResponse>, ApiError> {
    let charts = state
        .service
        .list_diet_charts(identity, params.patient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListDietChartsResponse { data: charts }))
}
