use chrono::Utc;

use crate::domain::{common::entities::app_errors::CoreError, profile::entities::Profile};
use crate::entity::profiles::Model as ProfileModel;

impl TryFrom<ProfileModel> for Profile {
    type Error = CoreError;

    fn try_from(model: ProfileModel) -> Result<Self, Self::Error> {
        Ok(Profile {
            id: model.id,
            user_id: model.user_id,
            email: model.email,
            full_name: model.full_name,
            role: model.role.parse()?,
            specialization: model.specialization,
            license_number: model.license_number,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}
