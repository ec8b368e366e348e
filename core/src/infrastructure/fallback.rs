use std::future::Future;

use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_chart::{entities::DietChart, ports::DietChartRepository},
    food::{entities::Food, ports::FoodRepository, value_objects::FoodSearchFilter},
    patient::{entities::Patient, ports::PatientRepository},
};

/// Repository decorator that serves reads from `fallback` when the live store fails with a
/// data access error. Writes only ever reach the live store.
#[derive(Debug, Clone)]
pub struct FallbackRepository<L, F> {
    live: L,
    fallback: F,
}

impl<L, F> FallbackRepository<L, F> {
    pub fn new(live: L, fallback: F) -> Self {
        Self { live, fallback }
    }
}

async fn read_through<T>(
    operation: &'static str,
    live: impl Future<Output = Result<T, CoreError>>,
    fallback: impl Future<Output = Result<T, CoreError>>,
) -> Result<T, CoreError> {
    match live.await {
        Err(CoreError::DataAccess(reason)) => {
            warn!(operation, %reason, "live store unavailable, serving sample data");
            fallback.await
        }
        other => other,
    }
}

impl<L, F> PatientRepository for FallbackRepository<L, F>
where
    L: PatientRepository,
    F: PatientRepository,
{
    async fn create_patient(&self, patient: Patient) -> Result<Patient, CoreError> {
        self.live.create_patient(patient).await
    }

    async fn get_by_id(&self, patient_id: Uuid) -> Result<Option<Patient>, CoreError> {
        read_through(
            "patients.get_by_id",
            self.live.get_by_id(patient_id),
            self.fallback.get_by_id(patient_id),
        )
        .await
    }

    async fn list_by_practitioner(&self, practitioner_id: Uuid) -> Result<Vec<Patient>, CoreError> {
        read_through(
            "patients.list_by_practitioner",
            self.live.list_by_practitioner(practitioner_id),
            self.fallback.list_by_practitioner(practitioner_id),
        )
        .await
    }

    // Duplicate detection guards a write, so it never consults sample data.
    async fn find_by_email(
        &self,
        practitioner_id: Uuid,
        email: String,
    ) -> Result<Option<Patient>, CoreError> {
        self.live.find_by_email(practitioner_id, email).await
    }

    async fn list_by_email(&self, email: String) -> Result<Vec<Patient>, CoreError> {
        read_through(
            "patients.list_by_email",
            self.live.list_by_email(email.clone()),
            self.fallback.list_by_email(email),
        )
        .await
    }

    async fn count_by_practitioner(&self, practitioner_id: Uuid) -> Result<u64, CoreError> {
        read_through(
            "patients.count_by_practitioner",
            self.live.count_by_practitioner(practitioner_id),
            self.fallback.count_by_practitioner(practitioner_id),
        )
        .await
    }
}

impl<L, F> FoodRepository for FallbackRepository<L, F>
where
    L: FoodRepository,
    F: FoodRepository,
{
    async fn search(&self, filter: FoodSearchFilter) -> Result<Vec<Food>, CoreError> {
        read_through(
            "foods.search",
            self.live.search(filter.clone()),
            self.fallback.search(filter),
        )
        .await
    }

    async fn get_by_id(&self, food_id: Uuid) -> Result<Option<Food>, CoreError> {
        read_through(
            "foods.get_by_id",
            self.live.get_by_id(food_id),
            self.fallback.get_by_id(food_id),
        )
        .await
    }

    async fn list(&self, limit: u64) -> Result<Vec<Food>, CoreError> {
        read_through(
            "foods.list",
            self.live.list(limit),
            self.fallback.list(limit),
        )
        .await
    }

    async fn count(&self) -> Result<u64, CoreError> {
        read_through("foods.count", self.live.count(), self.fallback.count()).await
    }
}

impl<L, F> DietChartRepository for FallbackRepository<L, F>
where
    L: DietChartRepository,
    F: DietChartRepository,
{
    async fn create(&self, chart: DietChart) -> Result<DietChart, CoreError> {
        self.live.create(chart).await
    }

    async fn list_by_practitioner(
        &self,
        practitioner_id: Uuid,
        patient_id: Option<Uuid>,
    ) -> Result<Vec<DietChart>, CoreError> {
        read_through(
            "diet_charts.list_by_practitioner",
            self.live.list_by_practitioner(practitioner_id, patient_id),
            self.fallback.list_by_practitioner(practitioner_id, patient_id),
        )
        .await
    }

    async fn list_by_patients(&self, patient_ids: Vec<Uuid>) -> Result<Vec<DietChart>, CoreError> {
        read_through(
            "diet_charts.list_by_patients",
            self.live.list_by_patients(patient_ids.clone()),
            self.fallback.list_by_patients(patient_ids),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            diet_chart::ports::MockDietChartRepository, food::ports::MockFoodRepository,
            patient::ports::MockPatientRepository,
        },
        infrastructure::fixtures::FixtureDataSource,
    };

    fn offline_patients() -> MockPatientRepository {
        let mut live = MockPatientRepository::new();
        live.expect_list_by_practitioner()
            .returning(|_| Box::pin(async { Err(CoreError::DataAccess("offline".to_string())) }));
        live.expect_create_patient()
            .returning(|_| Box::pin(async { Err(CoreError::DataAccess("offline".to_string())) }));
        live
    }

    #[tokio::test]
    async fn failed_reads_are_served_from_fixtures() {
        let fixtures = FixtureDataSource::load().unwrap();
        let expected = fixtures.dataset().patients.len();
        let repository = FallbackRepository::new(offline_patients(), fixtures);

        let patients = repository
            .list_by_practitioner(Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(patients.len(), expected);
    }

    #[tokio::test]
    async fn failed_writes_surface_the_error() {
        let fixtures = FixtureDataSource::load().unwrap();
        let patient = fixtures.dataset().patients[0].clone();
        let repository = FallbackRepository::new(offline_patients(), fixtures);

        let result = repository.create_patient(patient).await;

        assert_eq!(result, Err(CoreError::DataAccess("offline".to_string())));
    }

    #[tokio::test]
    async fn live_results_win_when_available() {
        let mut live = MockFoodRepository::new();
        live.expect_count().returning(|| Box::pin(async { Ok(0) }));
        let repository = FallbackRepository::new(live, FixtureDataSource::load().unwrap());

        assert_eq!(repository.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn only_data_access_errors_fall_back() {
        let mut live = MockFoodRepository::new();
        live.expect_get_by_id()
            .returning(|_| Box::pin(async { Err(CoreError::Forbidden("nope".to_string())) }));
        let repository = FallbackRepository::new(live, FixtureDataSource::load().unwrap());

        let result = FoodRepository::get_by_id(&repository, Uuid::new_v4()).await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn corrupt_records_do_not_swap_in_sample_charts() {
        let mut live = MockDietChartRepository::new();
        live.expect_list_by_practitioner().returning(|_, _| {
            Box::pin(async {
                Err(CoreError::CorruptRecord(
                    "unsupported meals schema version 9".to_string(),
                ))
            })
        });
        let repository = FallbackRepository::new(live, FixtureDataSource::load().unwrap());

        let result =
            DietChartRepository::list_by_practitioner(&repository, Uuid::new_v4(), None).await;

        assert!(matches!(result, Err(CoreError::CorruptRecord(_))));
    }
}
