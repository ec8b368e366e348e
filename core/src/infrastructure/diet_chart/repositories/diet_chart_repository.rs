use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_chart::{entities::DietChart, ports::DietChartRepository},
};
use crate::entity::diet_charts::{
    ActiveModel as DietChartActiveModel, Column as DietChartColumn, Entity as DietChartEntity,
    Model as DietChartModel,
};

#[derive(Debug, Clone)]
pub struct PostgresDietChartRepository {
    pub db: DatabaseConnection,
}

impl PostgresDietChartRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Undecodable rows are logged and left out so the rest of the list is still served.
fn into_charts(models: Vec<DietChartModel>) -> Result<Vec<DietChart>, CoreError> {
    let mut charts = Vec::with_capacity(models.len());

    for model in models {
        let chart_id = model.id;
        match DietChart::try_from(model) {
            Ok(chart) => charts.push(chart),
            Err(CoreError::CorruptRecord(reason)) => {
                warn!(%chart_id, %reason, "skipping unreadable diet chart");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(charts)
}

impl DietChartRepository for PostgresDietChartRepository {
    async fn create(&self, chart: DietChart) -> Result<DietChart, CoreError> {
        let model = DietChartEntity::insert(DietChartActiveModel::try_from(chart)?)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create diet chart: {}", e);
                CoreError::DataAccess(e.to_string())
            })?;

        DietChart::try_from(model)
    }

    async fn list_by_practitioner(
        &self,
        practitioner_id: Uuid,
        patient_id: Option<Uuid>,
    ) -> Result<Vec<DietChart>, CoreError> {
        let mut query =
            DietChartEntity::find().filter(DietChartColumn::PractitionerId.eq(practitioner_id));

        if let Some(patient_id) = patient_id {
            query = query.filter(DietChartColumn::PatientId.eq(patient_id));
        }

        let models = query
            .order_by_desc(DietChartColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list diet charts by practitioner: {}", e);
                CoreError::DataAccess(e.to_string())
            })?;

        into_charts(models)
    }

    async fn list_by_patients(&self, patient_ids: Vec<Uuid>) -> Result<Vec<DietChart>, CoreError> {
        let models = DietChartEntity::find()
            .filter(DietChartColumn::PatientId.is_in(patient_ids))
            .order_by_desc(DietChartColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list diet charts by patients: {}", e);
                CoreError::DataAccess(e.to_string())
            })?;

        into_charts(models)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    use super::*;

    fn chart_row(name: &str, practitioner_id: Uuid, meals: serde_json::Value) -> DietChartModel {
        let now = Utc::now().fixed_offset();

        DietChartModel {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            practitioner_id,
            name: name.to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            end_date: None,
            meals,
            is_active: true,
            special_instructions: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn unreadable_rows_are_skipped_not_fatal() {
        let practitioner_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                chart_row(
                    "Real chart",
                    practitioner_id,
                    json!({"schemaVersion": 1, "weeklyPlan": {}}),
                ),
                chart_row(
                    "Future chart",
                    practitioner_id,
                    json!({"schemaVersion": 9, "weeklyPlan": {}}),
                ),
            ]])
            .into_connection();
        let repository = PostgresDietChartRepository::new(db);

        let charts = repository
            .list_by_practitioner(practitioner_id, None)
            .await
            .unwrap();

        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].name, "Real chart");
    }

    #[tokio::test]
    async fn query_failures_are_data_access_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repository = PostgresDietChartRepository::new(db);

        let result = repository.list_by_patients(vec![Uuid::new_v4()]).await;

        assert!(matches!(result, Err(CoreError::DataAccess(_))));
    }
}
