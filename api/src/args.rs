use std::time::Duration;

use ayurdiet_core::domain::{
    common::{AuthConfig, AyurDietConfig, DatabaseConfig, GenerationConfig, LLMConfig},
    diet_chart::entities::{NutrientTotals, SlotNutritionDefaults},
};
use clap::{Args as ClapArgs, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "ayurdiet-api", version, about = "AyurDiet practice management API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub generation: GenerationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix mounted in front of every route, e.g. `/api`.
    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "disable-metrics", env = "DISABLE_METRICS", default_value_t = false)]
    pub disable_metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "ayurdiet")]
    pub name: String,

    #[arg(
        long = "database-run-migrations",
        env = "DATABASE_RUN_MIGRATIONS",
        default_value_t = false
    )]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    /// Shared secret the auth provider signs access tokens with.
    #[arg(long = "jwt-secret", env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    #[arg(long = "jwt-audience", env = "JWT_AUDIENCE", default_value = "authenticated")]
    pub audience: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-1.5-flash-latest"
    )]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

/// Nutrient placeholders for generated items, given as `calories/protein/carbs/fat`.
#[derive(Debug, Clone, ClapArgs)]
pub struct GenerationArgs {
    #[arg(long, env = "GENERATION_BREAKFAST_DEFAULTS", value_parser = parse_nutrients)]
    pub breakfast_defaults: Option<NutrientTotals>,

    #[arg(long, env = "GENERATION_LUNCH_DEFAULTS", value_parser = parse_nutrients)]
    pub lunch_defaults: Option<NutrientTotals>,

    #[arg(long, env = "GENERATION_DINNER_DEFAULTS", value_parser = parse_nutrients)]
    pub dinner_defaults: Option<NutrientTotals>,

    #[arg(long, env = "GENERATION_SNACKS_DEFAULTS", value_parser = parse_nutrients)]
    pub snacks_defaults: Option<NutrientTotals>,

    /// Number of catalog foods offered to the model per request.
    #[arg(long, env = "GENERATION_FOOD_CONTEXT_LIMIT", default_value_t = 100)]
    pub food_context_limit: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

fn parse_nutrients(raw: &str) -> Result<NutrientTotals, String> {
    let values = raw
        .split('/')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid nutrient value: {e}"))?;

    match values.as_slice() {
        [_, _, _, _] if !values.iter().all(|v| v.is_finite()) => {
            Err("nutrient values must be finite numbers".to_string())
        }
        [_, _, _, _] if values.iter().any(|v| *v < 0.0) => {
            Err("nutrient values cannot be negative".to_string())
        }
        [calories, protein, carbs, fat] => {
            Ok(NutrientTotals::new(*calories, *protein, *carbs, *fat))
        }
        _ => Err("expected calories/protein/carbs/fat".to_string()),
    }
}

impl From<GenerationArgs> for GenerationConfig {
    fn from(args: GenerationArgs) -> Self {
        let base = SlotNutritionDefaults::default();

        Self {
            slot_defaults: SlotNutritionDefaults {
                breakfast: args.breakfast_defaults.unwrap_or(base.breakfast),
                lunch: args.lunch_defaults.unwrap_or(base.lunch),
                dinner: args.dinner_defaults.unwrap_or(base.dinner),
                snacks: args.snacks_defaults.unwrap_or(base.snacks),
            },
            food_context_limit: args.food_context_limit,
        }
    }
}

impl From<Args> for AyurDietConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                run_migrations: args.db.run_migrations,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                timeout: Duration::from_secs(args.llm.timeout_secs),
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                audience: args.auth.audience,
            },
            generation: GenerationConfig::from(args.generation),
        }
    }
}
