use async_trait::async_trait;
use partner_core_db::models::partner::SiteModel;
use partner_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::SiteRepositoryImpl;

impl SiteRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &SiteRepositoryImpl,
        items: Vec<SiteModel>,
    ) -> Result<Vec<SiteModel>, Box<dyn Error + Send + Sync>> {
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
                    INSERT INTO site (id, partner_id, name, street, city, created_at, updated_at, row_version)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    "#,
                )
                .bind(item.id)
                .bind(item.partner_id)
                .bind(item.name.as_str())
                .bind(item.street.as_ref().map(|s| s.as_str()))
                .bind(item.city.as_ref().map(|s| s.as_str()))
                .bind(item.created_at)
                .bind(item.updated_at)
                .bind(item.row_version)
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
impl CreateBatch<Postgres, SiteModel> for SiteRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<SiteModel>,
    ) -> Result<Vec<SiteModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
