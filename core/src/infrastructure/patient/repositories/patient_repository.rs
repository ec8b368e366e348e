use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, Func, SimpleExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    patient::{entities::Patient, ports::PatientRepository},
};
use crate::entity::patients::{
    ActiveModel as PatientActiveModel, Column as PatientColumn, Entity as PatientEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresPatientRepository {
    pub db: DatabaseConnection,
}

impl PostgresPatientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn email_matches(email: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(PatientColumn::Email))).eq(email.trim().to_lowercase())
}

impl PatientRepository for PostgresPatientRepository {
    async fn create_patient(&self, patient: Patient) -> Result<Patient, CoreError> {
        let created = PatientEntity::insert(PatientActiveModel::from(patient))
            .exec_with_returning(&self.db)
            .await
            .map(Patient::from)
            .map_err(|e| {
                error!("Failed to create patient: {}", e);
                CoreError::DataAccess(e.to_string())
            })?;

        Ok(created)
    }

    async fn get_by_id(&self, patient_id: Uuid) -> Result<Option<Patient>, CoreError> {
        let patient = PatientEntity::find_by_id(patient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get patient by id: {}", e);
                CoreError::DataAccess(e.to_string())
            })?
            .map(Patient::from);

        Ok(patient)
    }

    async fn list_by_practitioner(&self, practitioner_id: Uuid) -> Result<Vec<Patient>, CoreError> {
        let patients = PatientEntity::find()
            .filter(PatientColumn::PractitionerId.eq(practitioner_id))
            .order_by_desc(PatientColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list patients by practitioner: {}", e);
                CoreError::DataAccess(e.to_string())
            })?
            .into_iter()
            .map(Patient::from)
            .collect();

        Ok(patients)
    }

    async fn find_by_email(
        &self,
        practitioner_id: Uuid,
        email: String,
    ) -> Result<Option<Patient>, CoreError> {
        let patient = PatientEntity::find()
            .filter(PatientColumn::PractitionerId.eq(practitioner_id))
            .filter(email_matches(&email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find patient by email: {}", e);
                CoreError::DataAccess(e.to_string())
            })?
            .map(Patient::from);

        Ok(patient)
    }

    async fn list_by_email(&self, email: String) -> Result<Vec<Patient>, CoreError> {
        let patients = PatientEntity::find()
            .filter(email_matches(&email))
            .order_by_desc(PatientColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list patients by email: {}", e);
                CoreError::DataAccess(e.to_string())
            })?
            .into_iter()
            .map(Patient::from)
            .collect();

        Ok(patients)
    }

    async fn count_by_practitioner(&self, practitioner_id: Uuid) -> Result<u64, CoreError> {
        PatientEntity::find()
            .filter(PatientColumn::PractitionerId.eq(practitioner_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count patients: {}", e);
                CoreError::DataAccess(e.to_string())
            })
    }
}
