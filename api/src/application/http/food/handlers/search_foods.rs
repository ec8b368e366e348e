use axum::extract::{Query, State};
use ayurdiet_core::domain::food::{
    entities::Food, ports::FoodService, value_objects::FoodSearchFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food::validators::SearchFoodsParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchFoodsResponse {
    pub data: Vec<Food>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food",
    summary = "Search foods",
    description = "Searches the food catalog by name and category. At most 50 foods are returned, ordered by name.",
    params(SearchFoodsParams),
    responses(
        (status = 200, body = SearchFoodsResponse)
    ),
)]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(params): Query<SearchFoodsParams>,
) -> Result<Response<SearchFoodsResponse>, ApiError> {
    let foods = state
        .service
        .search_foods(FoodSearchFilter::new(
            params.search,
            params.category,
            params.include_sanskrit.unwrap_or(false),
            params.limit,
        ))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchFoodsResponse { data: foods }))
}
