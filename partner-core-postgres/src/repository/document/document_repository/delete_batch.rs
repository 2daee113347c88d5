use async_trait::async_trait;
use partner_core_db::models::document::DocumentModel;
use partner_core_db::repository::delete_batch::DeleteBatch;
use partner_core_db::repository::load_batch::LoadBatch;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::DocumentRepositoryImpl;

impl DocumentRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let originals: Vec<DocumentModel> = self
            .load_batch(ids)
            .await?
            .into_iter()
            .flatten()
            .collect();
        if originals.is_empty() {
            return Ok(0);
        }

        let deleted_ids: Vec<Uuid> = originals.iter().map(|item| item.id).collect();

        {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            sqlx::query("DELETE FROM document WHERE id = ANY($1)")
                .bind(&deleted_ids)
                .execute(&mut **transaction)
                .await?;
        } // Transaction lock released here

        for original in &originals {
            self.tracker.record_deleted(original);
        }

        Ok(originals.len())
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for DocumentRepositoryImpl {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}
