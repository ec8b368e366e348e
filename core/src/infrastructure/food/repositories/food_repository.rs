use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{entities::Food, ports::FoodRepository, value_objects::FoodSearchFilter},
};
use crate::entity::foods::{Column as FoodColumn, Entity as FoodEntity};

#[derive(Debug, Clone)]
pub struct PostgresFoodRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn lower(column: FoodColumn) -> Expr {
    Expr::expr(Func::lower(Expr::col(column)))
}

/// `%term%` with LIKE wildcards in the term escaped.
fn contains_pattern(term: &str) -> LikeExpr {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

fn search_condition(filter: &FoodSearchFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(category) = filter.category() {
        condition = condition.add(lower(FoodColumn::Category).eq(category));
    }

    if let Some(term) = filter.term() {
        let mut names: Vec<SimpleExpr> = vec![lower(FoodColumn::Name).like(contains_pattern(&term))];
        if filter.include_sanskrit {
            names.push(lower(FoodColumn::NameSanskrit).like(contains_pattern(&term)));
        }
        condition = condition.add(
            names
                .into_iter()
                .fold(Condition::any(), |any, expr| any.add(expr)),
        );
    }

    condition
}

impl FoodRepository for PostgresFoodRepository {
    async fn search(&self, filter: FoodSearchFilter) -> Result<Vec<Food>, CoreError> {
        let foods = FoodEntity::find()
            .filter(search_condition(&filter))
            .order_by_asc(FoodColumn::Name)
            .limit(filter.effective_limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search foods: {}", e);
                CoreError::DataAccess(e.to_string())
            })?
            .into_iter()
            .map(Food::from)
            .collect();

        Ok(foods)
    }

    async fn get_by_id(&self, food_id: Uuid) -> Result<Option<Food>, CoreError> {
        let food = FoodEntity::find_by_id(food_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food by id: {}", e);
                CoreError::DataAccess(e.to_string())
            })?
            .map(Food::from);

        Ok(food)
    }

    async fn list(&self, limit: u64) -> Result<Vec<Food>, CoreError> {
        let foods = FoodEntity::find()
            .order_by_asc(FoodColumn::Name)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list foods: {}", e);
                CoreError::DataAccess(e.to_string())
            })?
            .into_iter()
            .map(Food::from)
            .collect();

        Ok(foods)
    }

    async fn count(&self) -> Result<u64, CoreError> {
        FoodEntity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count foods: {}", e);
            CoreError::DataAccess(e.to_string())
        })
    }
}
