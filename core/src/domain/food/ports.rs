use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{entities::Food, value_objects::FoodSearchFilter},
};

#[cfg_attr(test, mockall::automock)]
pub trait FoodService: Send + Sync {
    fn search_foods(
        &self,
        filter: FoodSearchFilter,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_food(&self, food_id: Uuid) -> impl Future<Output = Result<Food, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    fn search(
        &self,
        filter: FoodSearchFilter,
    ) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_by_id(
        &self,
        food_id: Uuid,
    ) -> impl Future<Output = Result<Option<Food>, CoreError>> + Send;

    /// First `limit` foods of the catalog, ordered by name.
    fn list(&self, limit: u64) -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
