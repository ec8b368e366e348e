use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    diet_chart::{entities::DietChart, value_objects::SaveDietChartInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait DietChartService: Send + Sync {
    fn save_diet_chart(
        &self,
        identity: Identity,
        input: SaveDietChartInput,
    ) -> impl Future<Output = Result<DietChart, CoreError>> + Send;

    fn list_diet_charts(
        &self,
        identity: Option<Identity>,
        patient_id: Option<Uuid>,
    ) -> impl Future<Output = Result<Vec<DietChart>, CoreError>> + Send;

    /// Charts written for the calling patient, matched through the email on their profile.
    fn my_diet_charts(
        &self,
        identity: Option<Identity>,
    ) -> impl Future<Output = Result<Vec<DietChart>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DietChartRepository: Send + Sync {
    fn create(
        &self,
        chart: DietChart,
    ) -> impl Future<Output = Result<DietChart, CoreError>> + Send;

    fn list_by_practitioner(
        &self,
        practitioner_id: Uuid,
        patient_id: Option<Uuid>,
    ) -> impl Future<Output = Result<Vec<DietChart>, CoreError>> + Send;

    fn list_by_patients(
        &self,
        patient_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<DietChart>, CoreError>> + Send;
}
