use crate::domain::patient::entities::Dosha;

#[derive(Debug, Clone)]
pub struct CreatePatientInput {
    pub name: String,
    pub email: Option<String>,
    pub age: i32,
    pub gender: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub dominant_dosha: Option<Dosha>,
    pub secondary_dosha: Option<Dosha>,
    pub medical_history: Option<String>,
    /// Comma-separated, as typed into the intake form.
    pub allergies: Option<String>,
    pub notes: Option<String>,
    pub meal_frequency: Option<i32>,
    pub water_intake: Option<f64>,
    pub bowel_movements: Option<i32>,
}

/// Splits a comma-separated allergy field, trimming entries and dropping empty ones.
pub fn parse_allergies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}
