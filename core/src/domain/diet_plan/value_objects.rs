use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_chart::entities::{DayKey, WeekPlan},
    food::entities::Food,
    patient::entities::{Dosha, Patient},
};

pub const DEFAULT_GOALS: &str = "General wellness and dosha balance";
pub const DEFAULT_DURATION: u32 = 7;

#[derive(Debug, Clone)]
pub struct GenerateDietPlanInput {
    pub patient_id: Uuid,
    pub duration: Option<u32>,
    pub preferences: Vec<String>,
    pub goals: Option<String>,
    /// Chart being edited; days the model does not return keep these meals.
    pub current_plan: Option<WeekPlan>,
}

impl GenerateDietPlanInput {
    pub fn duration(&self) -> Result<u32, CoreError> {
        let duration = self.duration.unwrap_or(DEFAULT_DURATION);
        let max = DayKey::ALL.len() as u32;

        if !(1..=max).contains(&duration) {
            return Err(CoreError::Validation(format!(
                "duration must be between 1 and {max} days"
            )));
        }

        Ok(duration)
    }
}

/// Patient facts handed to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub dominant_dosha: Dosha,
    pub secondary_dosha: Option<Dosha>,
    pub medical_history: Option<String>,
    pub allergies: Option<Vec<String>>,
    pub meal_frequency: i32,
    pub water_intake: Option<f64>,
    pub bowel_movements: i32,
}

impl PatientProfile {
    pub fn from_patient(patient: &Patient) -> Result<Self, CoreError> {
        let dominant_dosha = patient.dominant_dosha.ok_or_else(|| {
            CoreError::Validation(
                "record the patient's dominant dosha before generating a plan".to_string(),
            )
        })?;

        Ok(Self {
            name: patient.name.clone(),
            age: patient.age,
            gender: patient.gender.clone(),
            weight: patient.weight,
            height: patient.height,
            dominant_dosha,
            secondary_dosha: patient.secondary_dosha,
            medical_history: patient.medical_history.clone(),
            allergies: (!patient.allergies.is_empty()).then(|| patient.allergies.clone()),
            meal_frequency: patient.meal_frequency.unwrap_or(3),
            water_intake: patient.water_intake,
            bowel_movements: patient.bowel_movements.unwrap_or(1),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DietPlanRequest {
    pub patient: PatientProfile,
    pub duration: u32,
    pub preferences: Vec<String>,
    pub restrictions: Vec<String>,
    pub goals: String,
    pub available_foods: Vec<Food>,
}

impl DietPlanRequest {
    pub fn new(
        patient: &Patient,
        duration: u32,
        preferences: Vec<String>,
        goals: Option<String>,
        available_foods: Vec<Food>,
    ) -> Result<Self, CoreError> {
        let profile = PatientProfile::from_patient(patient)?;

        let goals = goals
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| DEFAULT_GOALS.to_string());

        Ok(Self {
            restrictions: patient.allergies.clone(),
            patient: profile,
            duration,
            preferences: preferences
                .into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            goals,
            available_foods,
        })
    }
}
