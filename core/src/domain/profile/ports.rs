use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, profile::entities::Profile};

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Profile>, CoreError>> + Send;
}
