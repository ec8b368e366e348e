use std::future::Future;

use tracing::error;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    profile::{entities::Profile, ports::ProfileRepository},
};

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => {
            error!("policy evaluation failed: {e}");
            Err(e)
        }
    }
}

pub trait Policy: Send + Sync {
    fn get_profile_from_identity(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;
}

#[derive(Clone)]
pub struct AyurDietPolicy<PR>
where
    PR: ProfileRepository,
{
    profile_repository: PR,
}

impl<PR> AyurDietPolicy<PR>
where
    PR: ProfileRepository,
{
    pub fn new(profile_repository: PR) -> Self {
        Self { profile_repository }
    }
}

impl<PR> Policy for AyurDietPolicy<PR>
where
    PR: ProfileRepository,
{
    async fn get_profile_from_identity(&self, identity: &Identity) -> Result<Profile, CoreError> {
        self.profile_repository
            .get_by_user_id(identity.id())
            .await?
            .ok_or_else(|| CoreError::Forbidden("no profile for this account".to_string()))
    }
}
