use serde_json::{Value, json};

fn meal_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "items": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "quantity": { "type": "string" },
                        "benefits": { "type": "string" }
                    },
                    "required": ["name", "quantity"]
                }
            },
            "timing": { "type": "string" },
            "instructions": { "type": "string" }
        },
        "required": ["items"]
    })
}

/// JSON schema the model's reply is constrained to.
pub fn get_diet_plan_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summary": { "type": "string" },
            "dailyPlan": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": { "type": "integer" },
                        "meals": {
                            "type": "object",
                            "properties": {
                                "breakfast": meal_schema(),
                                "lunch": meal_schema(),
                                "dinner": meal_schema(),
                                "snacks": meal_schema()
                            },
                            "required": ["breakfast", "lunch", "dinner"]
                        },
                        "dailyTotals": {
                            "type": "object",
                            "properties": {
                                "calories": { "type": "string" },
                                "primaryRasas": {
                                    "type": "array",
                                    "items": { "type": "string" }
                                },
                                "doshaBalance": { "type": "string" }
                            }
                        }
                    },
                    "required": ["day", "meals"]
                }
            },
            "generalGuidelines": {
                "type": "array",
                "items": { "type": "string" }
            },
            "progressNotes": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["summary", "dailyPlan"]
    })
}
