use tracing::{instrument, warn};

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    dashboard::{
        entities::{DashboardStats, DoshaDistribution, RecentActivity},
        ports::DashboardService,
    },
    diet_chart::ports::DietChartRepository,
    diet_plan::ports::LLMClient,
    food::ports::FoodRepository,
    patient::ports::PatientRepository,
    profile::ports::ProfileRepository,
};

impl<P, F, D, PR, LLM> DashboardService for Service<P, F, D, PR, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietChartRepository,
    PR: ProfileRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity))]
    async fn dashboard_stats(&self, identity: Option<Identity>) -> Result<DashboardStats, CoreError> {
        let Some(profile) = self.reader_profile(identity).await else {
            return Ok(DashboardStats::default());
        };

        let total_patients = self
            .patient_repository
            .count_by_practitioner(profile.id)
            .await?;
        let total_foods = self.food_repository.count().await?;

        Ok(DashboardStats {
            total_patients,
            total_foods,
        })
    }

    #[instrument(skip(self, identity))]
    async fn dosha_distribution(
        &self,
        identity: Option<Identity>,
    ) -> Result<DoshaDistribution, CoreError> {
        let Some(profile) = self.reader_profile(identity).await else {
            return Ok(DoshaDistribution::sample());
        };

        let patients = match self
            .patient_repository
            .list_by_practitioner(profile.id)
            .await
        {
            Ok(patients) => patients,
            Err(e) => {
                warn!("patients unavailable for dosha distribution: {e}");
                return Ok(DoshaDistribution::sample());
            }
        };

        Ok(DoshaDistribution::from_patients(&patients).unwrap_or_else(DoshaDistribution::sample))
    }

    #[instrument(skip(self, identity))]
    async fn recent_activity(&self, identity: Option<Identity>) -> Result<RecentActivity, CoreError> {
        let Some(profile) = self.reader_profile(identity).await else {
            return Ok(RecentActivity::empty());
        };

        let records = async {
            let patients = self
                .patient_repository
                .list_by_practitioner(profile.id)
                .await?;
            let charts = self
                .diet_chart_repository
                .list_by_practitioner(profile.id, None)
                .await?;

            Ok::<_, CoreError>((patients, charts))
        };

        match records.await {
            Ok((patients, charts)) => Ok(RecentActivity::from_records(&patients, &charts)
                .unwrap_or_else(RecentActivity::sample)),
            Err(e) => {
                warn!("records unavailable for recent activity: {e}");
                Ok(RecentActivity::sample())
            }
        }
    }
}
