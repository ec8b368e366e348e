use super::handlers::{
    create_patient::{__path_create_patient, create_patient},
    get_patient::{__path_get_patient, get_patient},
    list_patients::{__path_list_patients, list_patients},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_patients, create_patient, get_patient))]
pub struct PatientApiDoc;

pub fn patient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/patients", state.args.server.root_path),
            get(list_patients),
        )
        .route(
            &format!("{}/patients", state.args.server.root_path),
            post(create_patient),
        )
        .route(
            &format!("{}/patients/{{patient_id}}", state.args.server.root_path),
            get(get_patient),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
