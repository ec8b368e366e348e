pub mod get_food;
pub mod search_foods;
