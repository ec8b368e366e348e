use super::handlers::{
    list_diet_charts::{__path_list_diet_charts, list_diet_charts},
    my_diet_charts::{__path_my_diet_charts, my_diet_charts},
    save_diet_chart::{__path_save_diet_chart, save_diet_chart},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_diet_charts, save_diet_chart, my_diet_charts))]
pub struct DietChartApiDoc;

pub fn diet_chart_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/diet-charts", state.args.server.root_path),
            get(list_diet_charts),
        )
        .route(
            &format!("{}/diet-charts", state.args.server.root_path),
            post(save_diet_chart),
        )
        .route(
            &format!("{}/diet-charts/mine", state.args.server.root_path),
            get(my_diet_charts),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
