use async_trait::async_trait;
use partner_core_db::models::communication::CommunicationStatusModel;
use partner_core_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::CommunicationStatusRepositoryImpl;

impl CommunicationStatusRepositoryImpl {
    pub(super) async fn update_batch_impl(
        &self,
        items: Vec<CommunicationStatusModel>,
    ) -> Result<Vec<CommunicationStatusModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut updated_pairs = Vec::new();

        {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for item in items {
                let row = sqlx::query(
                    "SELECT id, name, created_at FROM communication_status WHERE id = $1",
                )
                .bind(item.id)
                .fetch_optional(&mut **transaction)
                .await?
                .ok_or_else(|| format!("Communication status {} not found", item.id))?;
                let original = CommunicationStatusModel::try_from_row(&row)?;

                sqlx::query("UPDATE communication_status SET name = $2 WHERE id = $1")
                    .bind(item.id)
                    .bind(item.name.as_str())
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
impl UpdateBatch<Postgres, CommunicationStatusModel> for CommunicationStatusRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<CommunicationStatusModel>,
    ) -> Result<Vec<CommunicationStatusModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::postgres_repositories::SessionRepositories;
    use crate::repository::audit::audit_entry_repository::AuditEntryRepositoryImpl;
    use crate::test_helper::{setup_test_context, test_actor};
    use crate::unit_of_work::UnitOfWork;
    use heapless::String as HeaplessString;
    use partner_core_db::audit::change_set::ChangeAction;
    use partner_core_db::models::communication::CommunicationStatusModel;
    use partner_core_db::repository::create_batch::CreateBatch;
    use partner_core_db::repository::update_batch::UpdateBatch;
    use serial_test::serial;
    use uuid::Uuid;

    #[tokio::test]
    #[serial]
    async fn test_status_rename_is_audited_generically()
    -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let status = CommunicationStatusModel {
            id: Uuid::new_v4(),
            name: HeaplessString::try_from("Open").unwrap(),
            created_at: chrono::Utc::now(),
        };
        ctx.repos
            .communication_status_repository
            .create_batch(vec![status.clone()])
            .await?;
        ctx.uow.commit().await?;

        let uow = UnitOfWork::begin(&ctx.pool, ctx.engine.clone(), test_actor()).await?;
        let repos = SessionRepositories::new(&uow);
        let mut status = status;
        status.name = HeaplessString::try_from("In progress").unwrap();
        repos
            .communication_status_repository
            .update_batch(vec![status.clone()])
            .await?;
        uow.commit().await?;

        let verify = UnitOfWork::begin(&ctx.pool, ctx.engine.clone(), test_actor()).await?;
        let audit_repo = AuditEntryRepositoryImpl::new(verify.executor());
        let entries = audit_repo.find_by_record_id(status.id).await?;
        let updated = entries
            .iter()
            .find(|entry| entry.action == ChangeAction::Updated)
            .unwrap();
        assert_eq!(
            updated.narrative,
            "Updated communication status (name: Open → In progress)"
        );
        verify.rollback().await?;

        Ok(())
    }
}
