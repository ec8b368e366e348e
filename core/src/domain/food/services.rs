use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diet_chart::ports::DietChartRepository,
    diet_plan::ports::LLMClient,
    food::{
        entities::Food,
        ports::{FoodRepository, FoodService},
        value_objects::FoodSearchFilter,
    },
    patient::ports::PatientRepository,
    profile::ports::ProfileRepository,
};

impl<P, F, D, PR, LLM> FoodService for Service<P, F, D, PR, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietChartRepository,
    PR: ProfileRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self))]
    async fn search_foods(&self, filter: FoodSearchFilter) -> Result<Vec<Food>, CoreError> {
        let foods = self.food_repository.search(filter).await?;

        Ok(foods)
    }

    #[instrument(skip(self))]
    async fn get_food(&self, food_id: Uuid) -> Result<Food, CoreError> {
        self.food_repository
            .get_by_id(food_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
