use ayurdiet_core::domain::patient::{entities::Dosha, value_objects::CreatePatientInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePatientValidator {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[validate(range(min = 1, max = 150, message = "age must be between 1 and 150"))]
    pub age: i32,

    #[validate(length(min = 1, message = "gender is required"))]
    pub gender: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "weight cannot be negative"))]
    pub weight: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "height cannot be negative"))]
    pub height: Option<f64>,

    #[serde(default)]
    pub dominant_dosha: Option<Dosha>,

    #[serde(default)]
    pub secondary_dosha: Option<Dosha>,

    #[serde(default)]
    pub medical_history: Option<String>,

    /// Comma-separated list, e.g. `"peanuts, dairy"`.
    #[serde(default)]
    pub allergies: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, max = 12, message = "meal_frequency must be between 1 and 12"))]
    pub meal_frequency: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "water_intake cannot be negative"))]
    pub water_intake: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0, message = "bowel_movements cannot be negative"))]
    pub bowel_movements: Option<i32>,
}

impl From<CreatePatientValidator> for CreatePatientInput {
    fn from(payload: CreatePatientValidator) -> Self {
        Self {
            name: payload.name,
            email: payload.email,
            age: payload.age,
            gender: payload.gender,
            weight: payload.weight,
            height: payload.height,
            dominant_dosha: payload.dominant_dosha,
            secondary_dosha: payload.secondary_dosha,
            medical_history: payload.medical_history,
            allergies: payload.allergies,
            notes: payload.notes,
            meal_frequency: payload.meal_frequency,
            water_intake: payload.water_intake,
            bowel_movements: payload.bowel_movements,
        }
    }
}
