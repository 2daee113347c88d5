use async_trait::async_trait;
use partner_core_db::models::communication::CommunicationStatusModel;
use partner_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CommunicationStatusRepositoryImpl;

impl CommunicationStatusRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &CommunicationStatusRepositoryImpl,
        items: Vec<CommunicationStatusModel>,
    ) -> Result<Vec<CommunicationStatusModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::new();

        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for item in items {
                sqlx::query(
                    r#"
                    INSERT INTO communication_status (id, name, created_at)
                    VALUES ($1, $2, $3)
                    "#,
                )
                .bind(item.id)
                .bind(item.name.as_str())
                .bind(item.created_at)
                .execute(&mut **transaction)
                .await?;

                saved_items.push(item);
            }
        } // Transaction lock released here

        for item in &saved_items {
            repo.tracker.record_created(item);
        }

        Ok(saved_items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, CommunicationStatusModel> for CommunicationStatusRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<CommunicationStatusModel>,
    ) -> Result<Vec<CommunicationStatusModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
