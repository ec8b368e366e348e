use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodsParams {
    /// Case-insensitive substring of the food name.
    pub search: Option<String>,
    /// Category to keep; `all` or empty keeps every category.
    #[schema(example = "grains")]
    pub category: Option<String>,
    /// Also match the Sanskrit name.
    pub include_sanskrit: Option<bool>,
    #[schema(example = 50)]
    pub limit: Option<u64>,
}
