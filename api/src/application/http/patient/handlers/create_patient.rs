use axum::extract::State;
use ayurdiet_core::domain::patient::{entities::Patient, ports::PatientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        patient::validators::CreatePatientValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreatePatientResponse {
    pub data: Patient,
}

#[utoipa::path(
    post,
    path = "",
    tag = "patient",
    summary = "Create patient",
    description = "Registers a patient under the calling practitioner. Allergies are given as a comma-separated list.",
    request_body = CreatePatientValidator,
    responses(
        (status = 201, body = CreatePatientResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Authentication required"),
        (status = 409, description = "A patient with this email already exists")
    ),
)]
pub async fn create_patient(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreatePatientValidator>,
) -> Result<Response<CreatePatientResponse>, ApiError> {
    let patient = state
        .service
        .create_patient(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreatePatientResponse { data: patient }))
}
