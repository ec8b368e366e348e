use tracing::warn;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        GenerationConfig,
        policies::{AyurDietPolicy, Policy},
    },
    diet_chart::ports::DietChartRepository,
    diet_plan::ports::LLMClient,
    food::ports::FoodRepository,
    patient::ports::PatientRepository,
    profile::{entities::Profile, ports::ProfileRepository},
};

/// Shared implementation of every service port. Each domain implements its service trait for
/// this struct in its own `services.rs`.
#[derive(Clone)]
pub struct Service<P, F, D, PR, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietChartRepository,
    PR: ProfileRepository,
    LLM: LLMClient,
{
    pub(crate) patient_repository: P,
    pub(crate) food_repository: F,
    pub(crate) diet_chart_repository: D,
    pub(crate) profile_repository: PR,
    pub(crate) llm_client: LLM,
    pub(crate) policy: AyurDietPolicy<PR>,
    pub(crate) generation: GenerationConfig,
}

impl<P, F, D, PR, LLM> Service<P, F, D, PR, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietChartRepository,
    PR: ProfileRepository + Clone,
    LLM: LLMClient,
{
    pub fn new(
        patient_repository: P,
        food_repository: F,
        diet_chart_repository: D,
        profile_repository: PR,
        llm_client: LLM,
        generation: GenerationConfig,
    ) -> Self {
        let policy = AyurDietPolicy::new(profile_repository.clone());

        Service {
            patient_repository,
            food_repository,
            diet_chart_repository,
            profile_repository,
            llm_client,
            policy,
            generation,
        }
    }
}

impl<P, F, D, PR, LLM> Service<P, F, D, PR, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietChartRepository,
    PR: ProfileRepository,
    LLM: LLMClient,
{
    /// Resolves the caller of a read path. Anonymous callers and accounts without a profile
    /// read as `None` so the caller can answer with empty or default data.
    pub(crate) async fn reader_profile(&self, identity: Option<Identity>) -> Option<Profile> {
        let identity = identity?;

        match self.policy.get_profile_from_identity(&identity).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(user_id = %identity.user_id, "could not resolve profile for read: {e}");
                None
            }
        }
    }
}
