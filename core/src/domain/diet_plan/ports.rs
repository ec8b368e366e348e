use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    diet_plan::{entities::DietPlanGeneration, value_objects::GenerateDietPlanInput},
};

/// Text generation backend used to draft plans.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DietPlanService: Send + Sync {
    fn generate_diet_plan(
        &self,
        identity: Identity,
        input: GenerateDietPlanInput,
    ) -> impl Future<Output = Result<DietPlanGeneration, CoreError>> + Send;
}
