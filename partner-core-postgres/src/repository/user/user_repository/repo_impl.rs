use partner_core_db::audit::change_set::ChangeTracker;
use partner_core_db::models::user::AppUserModel;
use std::error::Error;
use std::sync::Arc;

use crate::unit_of_work::Executor;

/// Maintains application users. Users are tracked like every other
/// write, but their kind is not registered with the audit engine, so
/// their mutations never surface in the trail.
pub struct UserRepositoryImpl {
    pub(crate) executor: Executor,
    pub(crate) tracker: Arc<ChangeTracker>,
}

impl UserRepositoryImpl {
    pub fn new(executor: Executor, tracker: Arc<ChangeTracker>) -> Self {
        Self { executor, tracker }
    }

    pub async fn create(
        &self,
        user: &AppUserModel,
    ) -> Result<AppUserModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, user).await
    }
}
