use super::handlers::{
    get_dosha_distribution::{__path_get_dosha_distribution, get_dosha_distribution},
    get_recent_activity::{__path_get_recent_activity, get_recent_activity},
    get_stats::{__path_get_stats, get_stats},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_stats, get_dosha_distribution, get_recent_activity))]
pub struct DashboardApiDoc;

pub fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/dashboard/stats", state.args.server.root_path),
            get(get_stats),
        )
        .route(
            &format!("{}/dashboard/dosha-distribution", state.args.server.root_path),
            get(get_dosha_distribution),
        )
        .route(
            &format!("{}/dashboard/recent-activity", state.args.server.root_path),
            get(get_recent_activity),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
