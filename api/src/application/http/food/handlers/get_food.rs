use axum::extract::{Path, State};
use ayurdiet_core::domain::food::{entities::Food, ports::FoodService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFoodResponse {
    pub data: Food,
}

#[utoipa::path(
    get,
    path = "/{food_id}",
    tag = "food",
    summary = "Get food",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = GetFoodResponse),
        (status = 404, description = "Food not found")
    ),
)]
pub async fn get_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetFoodResponse>, ApiError> {
    let food = state
        .service
        .get_food(food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFoodResponse { data: food }))
}
