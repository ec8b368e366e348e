use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        policies::{Policy, ensure_policy},
        services::Service,
    },
    diet_chart::{
        entities::DietChart,
        ports::{DietChartRepository, DietChartService},
        value_objects::SaveDietChartInput,
    },
    diet_plan::ports::LLMClient,
    food::ports::FoodRepository,
    patient::ports::{PatientPolicy, PatientRepository},
    profile::{entities::UserRole, ports::ProfileRepository},
};

impl<P, F, D, PR, LLM> DietChartService for Service<P, F, D, PR, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietChartRepository,
    PR: ProfileRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(user_id = %identity.user_id))]
    async fn save_diet_chart(
        &self,
        identity: Identity,
        input: SaveDietChartInput,
    ) -> Result<DietChart, CoreError> {
        let patient_id = input.validate()?;
        let profile = self.policy.get_profile_from_identity(&identity).await?;

        let patient = self
            .patient_repository
            .get_by_id(patient_id)
            .await?
            .ok_or_else(|| {
                CoreError::Validation("the selected patient does not exist".to_string())
            })?;

        ensure_policy(
            self.policy.can_view_patient(&profile, &patient).await,
            "this patient belongs to another practice",
        )?;

        let chart = input.into_chart(profile.id)?;
        let saved = self.diet_chart_repository.create(chart).await?;
        info!(chart_id = %saved.id, patient_id = %patient.id, "diet chart saved");

        Ok(saved)
    }

    #[instrument(skip(self, identity))]
    async fn list_diet_charts(
        &self,
        identity: Option<Identity>,
        patient_id: Option<Uuid>,
    ) -> Result<Vec<DietChart>, CoreError> {
        let Some(profile) = self.reader_profile(identity).await else {
            return Ok(vec![]);
        };

        let mut charts = self
            .diet_chart_repository
            .list_by_practitioner(profile.id, patient_id)
            .await?;
        charts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(charts)
    }

    #[instrument(skip(self, identity))]
    async fn my_diet_charts(&self, identity: Option<Identity>) -> Result<Vec<DietChart>, CoreError> {
        let Some(profile) = self.reader_profile(identity).await else {
            return Ok(vec![]);
        };

        if profile.role != UserRole::Patient {
            return Ok(vec![]);
        }

        let patient_ids: Vec<Uuid> = self
            .patient_repository
            .list_by_email(profile.email.to_lowercase())
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        if patient_ids.is_empty() {
            return Ok(vec![]);
        }

        let mut charts = self
            .diet_chart_repository
            .list_by_patients(patient_ids)
            .await?;
        charts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(charts)
    }
}
