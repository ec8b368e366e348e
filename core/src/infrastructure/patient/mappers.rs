use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::patient::entities::Patient;
use crate::entity::patients::{ActiveModel as PatientActiveModel, Model as PatientModel};

impl From<PatientModel> for Patient {
    fn from(model: PatientModel) -> Self {
        Patient {
            id: model.id,
            practitioner_id: model.practitioner_id,
            name: model.name,
            email: model.email,
            age: model.age,
            gender: model.gender,
            weight: model.weight,
            height: model.height,
            dominant_dosha: model.dominant_dosha.and_then(|d| d.parse().ok()),
            secondary_dosha: model.secondary_dosha.and_then(|d| d.parse().ok()),
            medical_history: model.medical_history,
            allergies: model.allergies.unwrap_or_default(),
            notes: model.notes,
            meal_frequency: model.meal_frequency,
            water_intake: model.water_intake,
            bowel_movements: model.bowel_movements,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<Patient> for PatientActiveModel {
    fn from(patient: Patient) -> Self {
        PatientActiveModel {
            id: Set(patient.id),
            practitioner_id: Set(patient.practitioner_id),
            name: Set(patient.name),
            email: Set(patient.email),
            age: Set(patient.age),
            gender: Set(patient.gender),
            weight: Set(patient.weight),
            height: Set(patient.height),
            dominant_dosha: Set(patient.dominant_dosha.map(|d| d.to_string())),
            secondary_dosha: Set(patient.secondary_dosha.map(|d| d.to_string())),
            medical_history: Set(patient.medical_history),
            allergies: Set((!patient.allergies.is_empty()).then_some(patient.allergies)),
            notes: Set(patient.notes),
            meal_frequency: Set(patient.meal_frequency),
            water_intake: Set(patient.water_intake),
            bowel_movements: Set(patient.bowel_movements),
            created_at: Set(patient.created_at.fixed_offset()),
            updated_at: Set(patient.updated_at.fixed_offset()),
        }
    }
}
