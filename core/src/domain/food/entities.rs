use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// A catalog food with its nutrient values and Ayurvedic properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub name_sanskrit: Option<String>,
    pub category: String,
    pub sub_category: Option<String>,
    pub description: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    #[serde(default)]
    pub rasas: Vec<Rasa>,
    pub virya: Option<Virya>,
    pub digestibility: Option<Digestibility>,
    #[serde(default)]
    pub dosha_effects: DoshaEffects,
    #[serde(default)]
    pub best_time_to_consume: Vec<String>,
    #[serde(default)]
    pub seasonal_suitability: Vec<String>,
    #[serde(default)]
    pub contraindications: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// The six tastes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Rasa {
    Sweet,
    Sour,
    Salty,
    Bitter,
    Pungent,
    Astringent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Virya {
    Hot,
    Cold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Digestibility {
    Easy,
    Moderate,
    Difficult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DoshaEffect {
    Increase,
    Decrease,
    Neutral,
}

/// Effect of a food on each dosha. Missing entries read as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DoshaEffects {
    #[serde(default = "neutral")]
    pub vata: DoshaEffect,
    #[serde(default = "neutral")]
    pub pitta: DoshaEffect,
    #[serde(default = "neutral")]
    pub kapha: DoshaEffect,
}

fn neutral() -> DoshaEffect {
    DoshaEffect::Neutral
}

impl Default for DoshaEffects {
    fn default() -> Self {
        Self {
            vata: DoshaEffect::Neutral,
            pitta: DoshaEffect::Neutral,
            kapha: DoshaEffect::Neutral,
        }
    }
}

macro_rules! lowercase_enum_str {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        "unknown {} '{}'",
                        stringify!($ty).to_lowercase(),
                        other
                    ))),
                }
            }
        }
    };
}

lowercase_enum_str!(Rasa {
    Sweet => "sweet",
    Sour => "sour",
    Salty => "salty",
    Bitter => "bitter",
    Pungent => "pungent",
    Astringent => "astringent",
});

lowercase_enum_str!(Virya {
    Hot => "hot",
    Cold => "cold",
});

lowercase_enum_str!(Digestibility {
    Easy => "easy",
    Moderate => "moderate",
    Difficult => "difficult",
});

lowercase_enum_str!(DoshaEffect {
    Increase => "increase",
    Decrease => "decrease",
    Neutral => "neutral",
});
