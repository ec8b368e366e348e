use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::Profile, ports::ProfileRepository},
};
use crate::entity::profiles::{Column as ProfileColumn, Entity as ProfileEntity};

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, CoreError> {
        let profile = ProfileEntity::find()
            .filter(ProfileColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get profile by user id: {}", e);
                CoreError::DataAccess(e.to_string())
            })?
            .map(Profile::try_from)
            .transpose()?;

        Ok(profile)
    }
}
