use chrono::Utc;

use crate::domain::food::entities::{DoshaEffects, Food};
use crate::entity::foods::Model as FoodModel;

impl From<FoodModel> for Food {
    fn from(model: FoodModel) -> Self {
        let dosha_effects = model
            .dosha_effects
            .and_then(|value| serde_json::from_value::<DoshaEffects>(value).ok())
            .unwrap_or_default();

        Food {
            id: model.id,
            name: model.name,
            name_sanskrit: model.name_sanskrit,
            category: model.category,
            sub_category: model.sub_category,
            description: model.description,
            calories: model.calories,
            protein: model.protein,
            carbohydrates: model.carbohydrates,
            fat: model.fat,
            fiber: model.fiber,
            rasas: model
                .rasas
                .unwrap_or_default()
                .iter()
                .filter_map(|r| r.parse().ok())
                .collect(),
            virya: model.virya.and_then(|v| v.parse().ok()),
            digestibility: model.digestibility.and_then(|d| d.parse().ok()),
            dosha_effects,
            best_time_to_consume: model.best_time_to_consume.unwrap_or_default(),
            seasonal_suitability: model.seasonal_suitability.unwrap_or_default(),
            contraindications: model.contraindications.unwrap_or_default(),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
