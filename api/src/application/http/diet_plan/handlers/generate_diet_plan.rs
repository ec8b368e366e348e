use axum::extract::State;
use ayurdiet_core::domain::{
    diet_chart::entities::WeekPlan,
    diet_plan::{
        entities::{DietPlanGeneration, GeneratedDietPlan, GenerationMetadata},
        ports::DietPlanService,
    },
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        diet_plan::validators::GenerateDietPlanValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDietPlanResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub diet_plan: GeneratedDietPlan,
    #[schema(value_type = Object)]
    pub week_plan: WeekPlan,
    pub metadata: GenerationMetadata,
}

impl From<DietPlanGeneration> for GenerateDietPlanResponse {
    fn from(generation: DietPlanGeneration) -> Self {
        Self {
            success: true,
            diet_plan: generation.diet_plan,
            week_plan: generation.week_plan,
            metadata: generation.metadata,
        }
    }
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "diet-plan",
    summary = "Generate diet plan",
    description = "Drafts a diet plan for a patient with the language model and maps it onto the weekly chart grid.",
    request_body = GenerateDietPlanValidator,
    responses(
        (status = 200, body = GenerateDietPlanResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid duration or incomplete patient profile"),
        (status = 401, body = ApiErrorResponse, description = "Authentication required"),
        (status = 422, body = ApiErrorResponse, description = "The model reply could not be used"),
        (status = 502, body = ApiErrorResponse, description = "The model could not be reached")
    ),
)]
pub async fn generate_diet_plan(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateDietPlanValidator>,
) -> Result<Response<GenerateDietPlanResponse>, ApiError> {
    let generation = state
        .service
        .generate_diet_plan(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateDietPlanResponse::from(generation)))
}
