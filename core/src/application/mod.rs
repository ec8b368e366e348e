use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{AyurDietConfig, services::Service},
    infrastructure::{
        db::postgres::Postgres,
        diet_chart::repositories::diet_chart_repository::PostgresDietChartRepository,
        fallback::FallbackRepository,
        fixtures::FixtureDataSource,
        food::repositories::food_repository::PostgresFoodRepository,
        llm::gemini_client::GeminiLLMClient,
        patient::repositories::patient_repository::PostgresPatientRepository,
        profile::repositories::profile_repository::PostgresProfileRepository,
    },
};

pub type AyurDietService = Service<
    FallbackRepository<PostgresPatientRepository, FixtureDataSource>,
    FallbackRepository<PostgresFoodRepository, FixtureDataSource>,
    FallbackRepository<PostgresDietChartRepository, FixtureDataSource>,
    PostgresProfileRepository,
    GeminiLLMClient,
>;

pub async fn create_service(config: AyurDietConfig) -> Result<AyurDietService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;

    create_service_with_connection(postgres.get_db(), &config)
}

/// Wires the service graph on top of an existing connection. Every read repository is backed
/// by the bundled sample dataset.
pub fn create_service_with_connection(
    db: DatabaseConnection,
    config: &AyurDietConfig,
) -> Result<AyurDietService, anyhow::Error> {
    let fixtures = FixtureDataSource::load()?;

    let patient = FallbackRepository::new(
        PostgresPatientRepository::new(db.clone()),
        fixtures.clone(),
    );
    let food = FallbackRepository::new(PostgresFoodRepository::new(db.clone()), fixtures.clone());
    let diet_chart =
        FallbackRepository::new(PostgresDietChartRepository::new(db.clone()), fixtures);
    let profile = PostgresProfileRepository::new(db);
    let llm = GeminiLLMClient::new(&config.llm)?;

    Ok(Service::new(
        patient,
        food,
        diet_chart,
        profile,
        llm,
        config.generation.clone(),
    ))
}
