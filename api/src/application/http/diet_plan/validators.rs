use ayurdiet_core::domain::{
    diet_chart::entities::WeekPlan, diet_plan::value_objects::GenerateDietPlanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDietPlanValidator {
    pub patient_id: Uuid,

    /// Number of days to plan, 1 to 7. Defaults to 7.
    #[serde(default)]
    #[validate(range(min = 1, max = 7, message = "duration must be between 1 and 7 days"))]
    pub duration: Option<u32>,

    #[serde(default)]
    pub preferences: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 1000, message = "goals must be at most 1000 characters"))]
    pub goals: Option<String>,

    /// Chart being edited. Days the generated plan does not cover keep these meals.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub current_plan: Option<WeekPlan>,
}

impl From<GenerateDietPlanValidator> for GenerateDietPlanInput {
    fn from(payload: GenerateDietPlanValidator) -> Self {
        Self {
            patient_id: payload.patient_id,
            duration: payload.duration,
            preferences: payload.preferences,
            goals: payload.goals,
            current_plan: payload.current_plan,
        }
    }
}
