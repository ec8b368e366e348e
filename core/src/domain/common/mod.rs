use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::diet_chart::entities::SlotNutritionDefaults;

pub mod entities;
pub mod policies;
pub mod services;
#[cfg(test)]
pub mod testing;

#[derive(Clone, Debug)]
pub struct AyurDietConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub auth: AuthConfig,
    pub generation: GenerationConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// Absent keys are tolerated at startup; generation calls fail cleanly instead.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub audience: String,
}

#[derive(Clone, Debug)]
pub struct GenerationConfig {
    pub slot_defaults: SlotNutritionDefaults,
    /// How many catalog foods are offered to the model as the ingredient pool.
    pub food_context_limit: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            slot_defaults: SlotNutritionDefaults::default(),
            food_context_limit: 100,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
