use std::sync::Arc;

use crate::application::http::{
    dashboard::router::dashboard_routes, diet_chart::router::diet_chart_routes,
    diet_plan::router::diet_plan_routes, food::router::food_routes, health::health_routes,
    patient::router::patient_routes,
    server::{app_state::AppState, openapi::ApiDoc},
};
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use ayurdiet_core::{
    application::create_service, domain::common::AyurDietConfig,
    infrastructure::auth::jwt::JwtTokenVerifier,
};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = AyurDietConfig::from(args.as_ref().clone());
    let token_verifier = JwtTokenVerifier::new(&config.auth);
    let service = create_service(config).await?;

    Ok(AppState::new(args, service, token_verifier))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allowed_origins = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid allowed origin: {origin}");
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true)
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(food_routes(state.clone()))
        .merge(patient_routes(state.clone()))
        .merge(diet_chart_routes(state.clone()))
        .merge(diet_plan_routes(state.clone()))
        .merge(dashboard_routes(state.clone()))
        .merge(health_routes(&root_path));

    let router = if state.args.server.disable_metrics {
        router.layer(trace_layer).layer(cors).with_state(state)
    } else {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

        router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(trace_layer)
            .layer(cors)
            .layer(prometheus_layer)
            .with_state(state)
    };

    Ok(router)
}
