use ayurdiet_core::domain::diet_chart::{entities::WeekPlan, value_objects::SaveDietChartInput};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveDietChartValidator {
    #[serde(default)]
    pub patient_id: Option<Uuid>,

    #[validate(length(max = 200, message = "name must be at most 200 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Meals keyed `day1`..`day7`, each with `breakfast`, `lunch`, `dinner` and `snacks`.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub week_plan: WeekPlan,

    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl From<SaveDietChartValidator> for SaveDietChartInput {
    fn from(payload: SaveDietChartValidator) -> Self {
        Self {
            patient_id: payload.patient_id,
            name: payload.name,
            description: payload.description,
            start_date: payload.start_date,
            end_date: payload.end_date,
            week_plan: payload.week_plan,
            special_instructions: payload.special_instructions,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListDietChartsParams {
    /// Restrict the list to one patient.
    pub patient_id: Option<Uuid>,
}
