use std::fmt::Display;

use crate::domain::{diet_plan::value_objects::DietPlanRequest, food::entities::Food};

const NOT_SPECIFIED: &str = "Not specified";
const NONE_SPECIFIED: &str = "None specified";

fn or_placeholder<T: Display>(value: Option<T>, placeholder: &str) -> String {
    value
        .map(|v| v.to_string())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

fn joined_or(values: &[String], placeholder: &str) -> String {
    if values.is_empty() {
        placeholder.to_string()
    } else {
        values.join(", ")
    }
}

fn food_line(food: &Food) -> String {
    let rasas = food
        .rasas
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let dosha_effects =
        serde_json::to_string(&food.dosha_effects).unwrap_or_else(|_| "{}".to_string());

    format!(
        "- {} ({}): {} cal, Rasas: {}, Dosha Effects: {}",
        food.name,
        food.category,
        or_placeholder(food.calories, "Unknown"),
        if rasas.is_empty() { "Unknown".to_string() } else { rasas },
        dosha_effects
    )
}

/// Renders the generation prompt. The food list is the only ingredient pool the model may use.
pub fn build_prompt(request: &DietPlanRequest) -> String {
    let patient = &request.patient;
    let duration = request.duration;
    let foods = request
        .available_foods
        .iter()
        .map(food_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an expert Ayurvedic nutritionist. Create a comprehensive {duration}-day diet plan for the following patient:

PATIENT PROFILE:
- Name: {name}
- Age: {age} years
- Gender: {gender}
- Weight: {weight} kg
- Height: {height} cm
- Dominant Dosha: {dominant}
- Secondary Dosha: {secondary}
- Medical History: {history}
- Allergies: {allergies}
- Meal Frequency: {meal_frequency} meals per day
- Water Intake: {water} liters/day
- Bowel Movements: {bowel} per day

PREFERENCES: {preferences}
RESTRICTIONS: {restrictions}
GOALS: {goals}

AVAILABLE FOODS DATABASE (Use these foods in your recommendations):
{foods}

Please provide a detailed {duration}-day diet plan that:
1. Balances the dominant dosha ({dominant})
2. Uses ONLY foods from the available foods database provided above
3. Includes appropriate foods for their constitution
4. Considers the six tastes (rasas) in proper proportions
5. Provides nutritional balance appropriate for their age and gender
6. Includes meal timing recommendations
7. Considers seasonal appropriateness
8. Respects any allergies and restrictions
9. MUST generate exactly {duration} days of meal plans (day 1 through day {duration})
10. Each day must include breakfast, lunch, and dinner with proper quantities

Format your response as a JSON object with this structure:
{{
  "summary": "Brief overview of the diet plan approach",
  "dailyPlan": [
    {{
      "day": 1,
      "meals": {{
        "breakfast": {{
          "items": [{{"name": "Food item", "quantity": "Amount", "benefits": "Ayurvedic benefits"}}],
          "timing": "7:00 AM",
          "instructions": "Preparation/consumption notes"
        }},
        "lunch": {{
          "items": [{{"name": "Food item", "quantity": "Amount", "benefits": "Ayurvedic benefits"}}],
          "timing": "12:00 PM",
          "instructions": "Preparation/consumption notes"
        }},
        "dinner": {{
          "items": [{{"name": "Food item", "quantity": "Amount", "benefits": "Ayurvedic benefits"}}],
          "timing": "7:00 PM",
          "instructions": "Preparation/consumption notes"
        }},
        "snacks": {{
          "items": [{{"name": "Snack item", "quantity": "Amount", "benefits": "Ayurvedic benefits"}}],
          "timing": "Mid-morning/afternoon",
          "instructions": "When and how to consume"
        }}
      }},
      "dailyTotals": {{
        "calories": "Estimated calories",
        "primaryRasas": ["dominant tastes for the day"],
        "doshaBalance": "How this day supports dosha balance"
      }}
    }}
  ],
  "generalGuidelines": [
    "Important dietary guidelines",
    "Lifestyle recommendations",
    "Foods to avoid or emphasize"
  ],
  "progressNotes": [
    "What to monitor",
    "Signs of improvement",
    "When to adjust the plan"
  ]
}}

Only return valid JSON. Do not include any markdown formatting, code fences or additional text."#,
        name = patient.name,
        age = patient.age,
        gender = patient.gender,
        weight = or_placeholder(patient.weight, NOT_SPECIFIED),
        height = or_placeholder(patient.height, NOT_SPECIFIED),
        dominant = patient.dominant_dosha,
        secondary = or_placeholder(patient.secondary_dosha, NOT_SPECIFIED),
        history = or_placeholder(patient.medical_history.as_deref(), NONE_SPECIFIED),
        allergies = joined_or(patient.allergies.as_deref().unwrap_or_default(), NONE_SPECIFIED),
        meal_frequency = patient.meal_frequency,
        water = or_placeholder(patient.water_intake, NOT_SPECIFIED),
        bowel = patient.bowel_movements,
        preferences = joined_or(&request.preferences, NONE_SPECIFIED),
        restrictions = joined_or(&request.restrictions, NONE_SPECIFIED),
        goals = request.goals,
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        diet_plan::value_objects::PatientProfile,
        food::entities::{DoshaEffect, DoshaEffects, Rasa},
        patient::entities::Dosha,
    };

    fn request() -> DietPlanRequest {
        DietPlanRequest {
            patient: PatientProfile {
                name: "Dev Sharma".to_string(),
                age: 38,
                gender: "male".to_string(),
                weight: Some(72.5),
                height: None,
                dominant_dosha: Dosha::Kapha,
                secondary_dosha: None,
                medical_history: None,
                allergies: None,
                meal_frequency: 3,
                water_intake: Some(2.0),
                bowel_movements: 1,
            },
            duration: 5,
            preferences: vec!["vegetarian".to_string()],
            restrictions: vec![],
            goals: "Weight balance".to_string(),
            available_foods: vec![Food {
                id: Uuid::new_v4(),
                name: "Barley".to_string(),
                name_sanskrit: Some("Yava".to_string()),
                category: "grains".to_string(),
                sub_category: None,
                description: None,
                calories: Some(354.0),
                protein: None,
                carbohydrates: None,
                fat: None,
                fiber: None,
                rasas: vec![Rasa::Sweet, Rasa::Astringent],
                virya: None,
                digestibility: None,
                dosha_effects: DoshaEffects {
                    vata: DoshaEffect::Increase,
                    pitta: DoshaEffect::Decrease,
                    kapha: DoshaEffect::Decrease,
                },
                best_time_to_consume: vec![],
                seasonal_suitability: vec![],
                contraindications: vec![],
                created_at: Utc::now(),
            }],
        }
    }

    #[test]
    fn prompt_states_profile_with_placeholders() {
        let prompt = build_prompt(&request());

        assert!(prompt.contains("Create a comprehensive 5-day diet plan"));
        assert!(prompt.contains("- Weight: 72.5 kg"));
        assert!(prompt.contains("- Height: Not specified cm"));
        assert!(prompt.contains("- Dominant Dosha: kapha"));
        assert!(prompt.contains("- Medical History: None specified"));
        assert!(prompt.contains("- Allergies: None specified"));
        assert!(prompt.contains("PREFERENCES: vegetarian"));
        assert!(prompt.contains("RESTRICTIONS: None specified"));
        assert!(prompt.contains("MUST generate exactly 5 days"));
    }

    #[test]
    fn prompt_lists_foods_as_the_ingredient_pool() {
        let prompt = build_prompt(&request());

        assert!(prompt.contains(
            r#"- Barley (grains): 354 cal, Rasas: sweet, astringent, Dosha Effects: {"vata":"increase","pitta":"decrease","kapha":"decrease"}"#
        ));
        assert!(prompt.contains("Uses ONLY foods from the available foods database"));
    }
}
