use async_trait::async_trait;
use partner_core_db::models::communication::CommunicationModel;
use partner_core_db::repository::load_batch::LoadBatch;
use partner_core_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::CommunicationRepositoryImpl;

impl CommunicationRepositoryImpl {
    pub(super) async fn update_batch_impl(
        &self,
        items: Vec<CommunicationModel>,
    ) -> Result<Vec<CommunicationModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        // Stored state doubles as the original snapshot for the audit diff.
        let ids: Vec<Uuid> = items.iter().map(|item| item.id).collect();
        let originals = self.load_batch(&ids).await?;

        let mut updated_pairs = Vec::new();

        {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for (mut item, original) in items.into_iter().zip(originals) {
                let original =
                    original.ok_or_else(|| format!("Communication {} not found", item.id))?;
                item.row_version = original.row_version + 1;

                sqlx::query(
                    r#"
                    UPDATE communication
                    SET partner_id = $2, site_id = $3, communication_type_id = $4,
                        communication_status_id = $5, assigned_user_id = $6, subject = $7,
                        details = $8, occurred_at = $9, updated_at = $10, row_version = $11
                    WHERE id = $1
                    "#,
                )
                .bind(item.id)
                .bind(item.partner_id)
                .bind(item.site_id)
                .bind(item.communication_type_id)
                .bind(item.communication_status_id)
                .bind(item.assigned_user_id)
                .bind(item.subject.as_str())
                .bind(item.details.as_ref().map(|s| s.as_str()))
                .bind(item.occurred_at)
                .bind(item.updated_at)
                .bind(item.row_version)
                .execute(&mut **transaction)
                .await?;

                updated_pairs.push((original, item));
            }
        } // Transaction lock released here

        let mut updated_items = Vec::with_capacity(updated_pairs.len());
        for (original, item) in updated_pairs {
            self.tracker.record_updated(&original, &item);
            updated_items.push(item);
        }

        Ok(updated_items)
    }
}

#[async_trait]
impl UpdateBatch<Postgres, CommunicationModel> for CommunicationRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<CommunicationModel>,
    ) -> Result<Vec<CommunicationModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
