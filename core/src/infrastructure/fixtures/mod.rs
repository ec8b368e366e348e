use std::sync::Arc;

use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_chart::{entities::DietChart, ports::DietChartRepository},
    food::{entities::Food, ports::FoodRepository, value_objects::FoodSearchFilter},
    patient::{entities::Patient, ports::PatientRepository},
};

const SAMPLE_DATA: &str = include_str!("sample_data.json");

#[derive(Debug, Deserialize)]
pub struct SampleDataset {
    pub patients: Vec<Patient>,
    pub foods: Vec<Food>,
    pub diet_charts: Vec<DietChart>,
}

/// Read-only in-memory data source backed by the bundled sample dataset. Sample patients and
/// charts are presented as belonging to whichever practitioner asks for them.
#[derive(Debug, Clone)]
pub struct FixtureDataSource {
    dataset: Arc<SampleDataset>,
}

impl FixtureDataSource {
    pub fn load() -> Result<Self, CoreError> {
        let dataset: SampleDataset = serde_json::from_str(SAMPLE_DATA).map_err(|e| {
            error!("Failed to load sample dataset: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            dataset: Arc::new(dataset),
        })
    }

    pub fn dataset(&self) -> &SampleDataset {
        &self.dataset
    }

    fn read_only<T>(&self) -> Result<T, CoreError> {
        Err(CoreError::DataAccess(
            "the sample dataset is read-only".to_string(),
        ))
    }
}

fn owned_by(mut patient: Patient, practitioner_id: Uuid) -> Patient {
    patient.practitioner_id = practitioner_id;
    patient
}

fn newest_first<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by_key(|item| std::cmp::Reverse(key(item)));
    items
}

impl PatientRepository for FixtureDataSource {
    async fn create_patient(&self, _patient: Patient) -> Result<Patient, CoreError> {
        self.read_only()
    }

    async fn get_by_id(&self, patient_id: Uuid) -> Result<Option<Patient>, CoreError> {
        Ok(self
            .dataset
            .patients
            .iter()
            .find(|p| p.id == patient_id)
            .cloned())
    }

    async fn list_by_practitioner(&self, practitioner_id: Uuid) -> Result<Vec<Patient>, CoreError> {
        let patients = self
            .dataset
            .patients
            .iter()
            .cloned()
            .map(|p| owned_by(p, practitioner_id))
            .collect();

        Ok(newest_first(patients, |p: &Patient| p.created_at))
    }

    async fn find_by_email(
        &self,
        practitioner_id: Uuid,
        email: String,
    ) -> Result<Option<Patient>, CoreError> {
        Ok(self
            .dataset
            .patients
            .iter()
            .find(|p| {
                p.email
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(email.trim()))
            })
            .cloned()
            .map(|p| owned_by(p, practitioner_id)))
    }

    async fn list_by_email(&self, email: String) -> Result<Vec<Patient>, CoreError> {
        Ok(self
            .dataset
            .patients
            .iter()
            .filter(|p| {
                p.email
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(email.trim()))
            })
            .cloned()
            .collect())
    }

    async fn count_by_practitioner(&self, _practitioner_id: Uuid) -> Result<u64, CoreError> {
        Ok(self.dataset.patients.len() as u64)
    }
}

impl FoodRepository for FixtureDataSource {
    async fn search(&self, filter: FoodSearchFilter) -> Result<Vec<Food>, CoreError> {
        Ok(filter.apply(&self.dataset.foods))
    }

    async fn get_by_id(&self, food_id: Uuid) -> Result<Option<Food>, CoreError> {
        Ok(self
            .dataset
            .foods
            .iter()
            .find(|f| f.id == food_id)
            .cloned())
    }

    async fn list(&self, limit: u64) -> Result<Vec<Food>, CoreError> {
        let mut foods = self.dataset.foods.clone();
        foods.sort_by(|a, b| a.name.cmp(&b.name));
        foods.truncate(limit as usize);

        Ok(foods)
    }

    async fn count(&self) -> Result<u64, CoreError> {
        Ok(self.dataset.foods.len() as u64)
    }
}

impl DietChartRepository for FixtureDataSource {
    async fn create(&self, _chart: DietChart) -> Result<DietChart, CoreError> {
        self.read_only()
    }

    async fn list_by_practitioner(
        &self,
        practitioner_id: Uuid,
        patient_id: Option<Uuid>,
    ) -> Result<Vec<DietChart>, CoreError> {
        let charts = self
            .dataset
            .diet_charts
            .iter()
            .filter(|c| patient_id.is_none_or(|id| c.patient_id == id))
            .cloned()
            .map(|mut c| {
                c.practitioner_id = practitioner_id;
                c
            })
            .collect();

        Ok(newest_first(charts, |c: &DietChart| c.created_at))
    }

    async fn list_by_patients(&self, patient_ids: Vec<Uuid>) -> Result<Vec<DietChart>, CoreError> {
        let charts = self
            .dataset
            .diet_charts
            .iter()
            .filter(|c| patient_ids.contains(&c.patient_id))
            .cloned()
            .collect();

        Ok(newest_first(charts, |c: &DietChart| c.created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diet_chart::entities::DayKey;

    #[test]
    fn sample_dataset_loads() {
        let fixtures = FixtureDataSource::load().unwrap();
        let dataset = fixtures.dataset();

        assert_eq!(dataset.patients.len(), 6);
        assert!(dataset.foods.len() >= 20);
        assert_eq!(dataset.diet_charts.len(), 6);
        assert!(
            !dataset.diet_charts[0]
                .week_plan
                .day(DayKey::Day1)
                .breakfast
                .is_empty()
        );
    }

    #[tokio::test]
    async fn rice_in_grains_returns_sorted_grains_only() {
        let fixtures = FixtureDataSource::load().unwrap();
        let filter = FoodSearchFilter::new(
            Some("rice".to_string()),
            Some("grains".to_string()),
            false,
            None,
        );

        let foods = FoodRepository::search(&fixtures, filter).await.unwrap();
        let names: Vec<&str> = foods.iter().map(|f| f.name.as_str()).collect();

        assert!(!foods.is_empty());
        assert!(foods.len() <= 50);
        assert!(foods.iter().all(|f| f.category == "grains"));
        assert!(foods.iter().all(|f| f.name.to_lowercase().contains("rice")));
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
        assert!(!names.contains(&"Rice Milk"));
    }

    #[tokio::test]
    async fn samples_are_presented_as_the_callers_patients() {
        let fixtures = FixtureDataSource::load().unwrap();
        let practitioner_id = Uuid::new_v4();

        let patients = PatientRepository::list_by_practitioner(&fixtures, practitioner_id)
            .await
            .unwrap();

        assert!(patients.iter().all(|p| p.practitioner_id == practitioner_id));
        assert!(
            patients
                .windows(2)
                .all(|w| w[0].created_at >= w[1].created_at)
        );
    }

    #[tokio::test]
    async fn writes_are_refused() {
        let fixtures = FixtureDataSource::load().unwrap();
        let patient = fixtures.dataset().patients[0].clone();

        let result = PatientRepository::create_patient(&fixtures, patient).await;
        assert!(matches!(result, Err(CoreError::DataAccess(_))));
    }
}
