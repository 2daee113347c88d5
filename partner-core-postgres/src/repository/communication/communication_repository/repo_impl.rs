use async_trait::async_trait;
use partner_core_db::audit::change_set::ChangeTracker;
use partner_core_db::models::communication::CommunicationModel;
use partner_core_db::repository::load_batch::LoadBatch;
use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct CommunicationRepositoryImpl {
    pub(crate) executor: Executor,
    pub(crate) tracker: Arc<ChangeTracker>,
}

impl CommunicationRepositoryImpl {
    pub fn new(executor: Executor, tracker: Arc<ChangeTracker>) -> Self {
        Self { executor, tracker }
    }
}

#[async_trait]
impl LoadBatch<Postgres, CommunicationModel> for CommunicationRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<CommunicationModel>>, Box<dyn Error + Send + Sync>> {
        super::load_batch::load_batch_impl(&self.executor, ids).await
    }
}

impl TryFromRow<PgRow> for CommunicationModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CommunicationModel {
            id: row.try_get("id")?,
            partner_id: row.try_get("partner_id")?,
            site_id: row.try_get("site_id")?,
            communication_type_id: row.try_get("communication_type_id")?,
            communication_status_id: row.try_get("communication_status_id")?,
            assigned_user_id: row.try_get("assigned_user_id")?,
            subject: get_heapless_string(row, "subject")?,
            details: get_optional_heapless_string(row, "details")?,
            occurred_at: row.try_get("occurred_at")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            row_version: row.try_get("row_version")?,
        })
    }
}
