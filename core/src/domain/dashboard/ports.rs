use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    dashboard::entities::{DashboardStats, DoshaDistribution, RecentActivity},
};

#[cfg_attr(test, mockall::automock)]
pub trait DashboardService: Send + Sync {
    fn dashboard_stats(
        &self,
        identity: Option<Identity>,
    ) -> impl Future<Output = Result<DashboardStats, CoreError>> + Send;

    /// Dominant-dosha split of the caller's patients, or the even sample split when there is
    /// nothing to count.
    fn dosha_distribution(
        &self,
        identity: Option<Identity>,
    ) -> impl Future<Output = Result<DoshaDistribution, CoreError>> + Send;

    /// The practice's newest patients and charts as one feed. Anonymous callers get an empty
    /// feed; a practice with nothing recorded, or whose records cannot be read, gets the
    /// sample feed.
    fn recent_activity(
        &self,
        identity: Option<Identity>,
    ) -> impl Future<Output = Result<RecentActivity, CoreError>> + Send;
}
