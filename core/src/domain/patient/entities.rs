use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7},
    patient::value_objects::{CreatePatientInput, parse_allergies},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    pub id: Uuid,
    pub practitioner_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub age: i32,
    pub gender: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub dominant_dosha: Option<Dosha>,
    pub secondary_dosha: Option<Dosha>,
    pub medical_history: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub notes: Option<String>,
    pub meal_frequency: Option<i32>,
    pub water_intake: Option<f64>,
    pub bowel_movements: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    /// Builds a new record owned by `practitioner_id`, rejecting inputs that miss a name,
    /// a gender or a positive age.
    pub fn new(practitioner_id: Uuid, input: CreatePatientInput) -> Result<Self, CoreError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Validation("patient name is required".to_string()));
        }

        let gender = input.gender.trim().to_lowercase();
        if gender.is_empty() {
            return Err(CoreError::Validation("patient gender is required".to_string()));
        }

        if input.age <= 0 {
            return Err(CoreError::Validation(
                "patient age must be greater than zero".to_string(),
            ));
        }

        let (now, _) = generate_timestamp();

        Ok(Self {
            id: generate_uuid_v7(),
            practitioner_id,
            name,
            email: non_blank(input.email).map(|e| e.to_lowercase()),
            age: input.age,
            gender,
            weight: input.weight,
            height: input.height,
            dominant_dosha: input.dominant_dosha,
            secondary_dosha: input.secondary_dosha,
            medical_history: non_blank(input.medical_history),
            allergies: input
                .allergies
                .as_deref()
                .map(parse_allergies)
                .unwrap_or_default(),
            notes: non_blank(input.notes),
            meal_frequency: input.meal_frequency,
            water_intake: input.water_intake,
            bowel_movements: input.bowel_movements,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_owned_by(&self, practitioner_id: Uuid) -> bool {
        self.practitioner_id == practitioner_id
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Ayurvedic constitution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Dosha::Vata => "Air & Space - Movement & Communication",
            Dosha::Pitta => "Fire & Water - Metabolism & Transformation",
            Dosha::Kapha => "Earth & Water - Structure & Lubrication",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dosha {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vata" => Ok(Dosha::Vata),
            "pitta" => Ok(Dosha::Pitta),
            "kapha" => Ok(Dosha::Kapha),
            other => Err(CoreError::Validation(format!("unknown dosha '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CreatePatientInput {
        CreatePatientInput {
            name: "  Asha Rao ".to_string(),
            email: Some("Asha@Example.com".to_string()),
            age: 34,
            gender: "Female".to_string(),
            weight: Some(58.0),
            height: None,
            dominant_dosha: Some(Dosha::Pitta),
            secondary_dosha: None,
            medical_history: Some("   ".to_string()),
            allergies: Some("peanuts, , dairy ".to_string()),
            notes: None,
            meal_frequency: Some(3),
            water_intake: None,
            bowel_movements: None,
        }
    }

    #[test]
    fn new_patient_normalizes_input() {
        let practitioner_id = Uuid::new_v4();
        let patient = Patient::new(practitioner_id, input()).unwrap();

        assert_eq!(patient.name, "Asha Rao");
        assert_eq!(patient.gender, "female");
        assert_eq!(patient.email.as_deref(), Some("asha@example.com"));
        assert_eq!(patient.allergies, vec!["peanuts", "dairy"]);
        assert_eq!(patient.medical_history, None);
        assert!(patient.is_owned_by(practitioner_id));
    }

    #[test]
    fn new_patient_requires_name_gender_and_positive_age() {
        let mut missing_name = input();
        missing_name.name = " ".to_string();
        assert!(matches!(
            Patient::new(Uuid::new_v4(), missing_name),
            Err(CoreError::Validation(_))
        ));

        let mut missing_gender = input();
        missing_gender.gender = String::new();
        assert!(Patient::new(Uuid::new_v4(), missing_gender).is_err());

        let mut zero_age = input();
        zero_age.age = 0;
        assert!(Patient::new(Uuid::new_v4(), zero_age).is_err());
    }

    #[test]
    fn dosha_round_trips_through_its_wire_name() {
        for dosha in Dosha::ALL {
            assert_eq!(dosha.as_str().parse::<Dosha>().unwrap(), dosha);
        }
        assert_eq!(
            serde_json::to_string(&Dosha::Kapha).unwrap(),
            "\"kapha\"".to_string()
        );
    }
}
