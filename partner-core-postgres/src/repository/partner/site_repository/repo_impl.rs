use async_trait::async_trait;
use partner_core_db::audit::change_set::ChangeTracker;
use partner_core_db::models::partner::SiteModel;
use partner_core_db::repository::load_batch::LoadBatch;
use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct SiteRepositoryImpl {
    pub(crate) executor: Executor,
    pub(crate) tracker: Arc<ChangeTracker>,
}

impl SiteRepositoryImpl {
    pub fn new(executor: Executor, tracker: Arc<ChangeTracker>) -> Self {
        Self { executor, tracker }
    }
}

#[async_trait]
impl LoadBatch<Postgres, SiteModel> for SiteRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<SiteModel>>, Box<dyn Error + Send + Sync>> {
        super::load_batch::load_batch_impl(&self.executor, ids).await
    }
}

impl TryFromRow<PgRow> for SiteModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(SiteModel {
            id: row.try_get("id")?,
            partner_id: row.try_get("partner_id")?,
            name: get_heapless_string(row, "name")?,
            street: get_optional_heapless_string(row, "street")?,
            city: get_optional_heapless_string(row, "city")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            row_version: row.try_get("row_version")?,
        })
    }
}
