use axum::extract::State;
use ayurdiet_core::domain::patient::{entities::Patient, ports::PatientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::OptionalIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListPatientsResponse {
    pub data: Vec<Patient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "patient",
    summary = "List patients",
    description = "Lists the caller's patients, newest first. Anonymous callers receive an empty list.",
    responses(
        (status = 200, body = ListPatientsResponse)
    ),
)]
pub async fn list_patients(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<ListPatientsResponse>, ApiError> {
    let patients = state
        .service
        .list_patients(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListPatientsResponse { data: patients }))
}
