use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{GenerationConfig, entities::app_errors::CoreError, services::Service},
    diet_chart::ports::DietChartRepository,
    diet_plan::ports::LLMClient,
    food::ports::FoodRepository,
    patient::ports::PatientRepository,
    profile::{
        entities::{Profile, UserRole},
        ports::ProfileRepository,
    },
};

#[derive(Clone, Default)]
pub struct KnownProfiles(Vec<Profile>);

impl KnownProfiles {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self(profiles)
    }
}

impl ProfileRepository for KnownProfiles {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, CoreError> {
        Ok(self.0.iter().find(|p| p.user_id == user_id).cloned())
    }
}

pub fn practitioner() -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        email: "vaidya@example.com".to_string(),
        full_name: Some("Dr. Meera Iyer".to_string()),
        role: UserRole::Practitioner,
        specialization: Some("Panchakarma".to_string()),
        license_number: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn identity_for(profile: &Profile) -> Identity {
    Identity {
        user_id: profile.user_id,
        email: Some(profile.email.clone()),
    }
}

pub fn test_service<P, F, D, LLM>(
    patients: P,
    foods: F,
    charts: D,
    profiles: KnownProfiles,
    llm: LLM,
) -> Service<P, F, D, KnownProfiles, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietChartRepository,
    LLM: LLMClient,
{
    Service::new(
        patients,
        foods,
        charts,
        profiles,
        llm,
        GenerationConfig::default(),
    )
}
