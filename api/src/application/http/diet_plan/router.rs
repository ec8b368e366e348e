use super::handlers::generate_diet_plan::{__path_generate_diet_plan, generate_diet_plan};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_diet_plan))]
pub struct DietPlanApiDoc;

pub fn diet_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/diet-plans/generate", state.args.server.root_path),
            post(generate_diet_plan),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
