use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::diet_chart::entities::{MealSlot, WeekPlan};

/// A model-drafted plan, as parsed from the model's JSON reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedDietPlan {
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub daily_plan: Vec<GeneratedDay>,
    #[serde(deserialize_with = "null_as_default")]
    pub general_guidelines: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub progress_notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedDay {
    /// Informational only; days are placed by their position in `dailyPlan`.
    pub day: Option<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub meals: GeneratedMeals,
    pub daily_totals: Option<GeneratedDailyTotals>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedMeals {
    #[serde(deserialize_with = "null_as_default")]
    pub breakfast: GeneratedMeal,
    #[serde(deserialize_with = "null_as_default")]
    pub lunch: GeneratedMeal,
    #[serde(deserialize_with = "null_as_default")]
    pub dinner: GeneratedMeal,
    #[serde(deserialize_with = "null_as_default")]
    pub snacks: GeneratedMeal,
}

impl GeneratedMeals {
    pub fn meal(&self, slot: MealSlot) -> &GeneratedMeal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedMeal {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<SuggestedItem>,
    #[serde(deserialize_with = "text_or_number")]
    pub timing: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestedItem {
    pub name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub quantity: Option<String>,
    pub benefits: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedDailyTotals {
    #[serde(deserialize_with = "text_or_number")]
    pub calories: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_rasas: Vec<String>,
    pub dosha_balance: Option<String>,
}

/// An explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Models sometimes answer `"quantity": 2` where text was asked for.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    pub patient_name: String,
    /// The plan summary, offered as the chart name.
    pub suggested_chart_name: String,
    pub duration: u32,
    pub generated_at: DateTime<Utc>,
    pub days_applied: usize,
    pub request_id: Uuid,
}

/// Result of a generation: the raw drafted plan, the week grid it was mapped onto, and
/// bookkeeping about the call.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanGeneration {
    #[schema(value_type = Object)]
    pub diet_plan: GeneratedDietPlan,
    #[schema(value_type = Object)]
    pub week_plan: WeekPlan,
    pub metadata: GenerationMetadata,
}
