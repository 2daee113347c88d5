use async_trait::async_trait;
use partner_core_db::audit::change_set::ChangeTracker;
use partner_core_db::models::document::DocumentModel;
use partner_core_db::repository::load_batch::LoadBatch;
use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct DocumentRepositoryImpl {
    pub(crate) executor: Executor,
    pub(crate) tracker: Arc<ChangeTracker>,
}

impl DocumentRepositoryImpl {
    pub fn new(executor: Executor, tracker: Arc<ChangeTracker>) -> Self {
        Self { executor, tracker }
    }
}

#[async_trait]
impl LoadBatch<Postgres, DocumentModel> for DocumentRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<DocumentModel>>, Box<dyn Error + Send + Sync>> {
        super::load_batch::load_batch_impl(&self.executor, ids).await
    }
}

impl TryFromRow<PgRow> for DocumentModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(DocumentModel {
            id: row.try_get("id")?,
            partner_id: row.try_get("partner_id")?,
            document_type_id: row.try_get("document_type_id")?,
            file_name: get_heapless_string(row, "file_name")?,
            description: get_optional_heapless_string(row, "description")?,
            archived: row.try_get("archived")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            row_version: row.try_get("row_version")?,
        })
    }
}
