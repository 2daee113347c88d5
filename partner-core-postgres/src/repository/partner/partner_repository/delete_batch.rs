use async_trait::async_trait;
use partner_core_db::models::partner::PartnerModel;
use partner_core_db::repository::delete_batch::DeleteBatch;
use partner_core_db::repository::load_batch::LoadBatch;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PartnerRepositoryImpl;

impl PartnerRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        // The rows are gone after the DELETE; capture them first so the
        // audit narrative can still name what was removed.
        let originals: Vec<PartnerModel> = self
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

            sqlx::query("DELETE FROM partner WHERE id = ANY($1)")
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
impl DeleteBatch<Postgres> for PartnerRepositoryImpl {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use partner_core_db::audit::change_set::ChangeAction;
    use partner_core_db::repository::create_batch::CreateBatch;
    use partner_core_db::repository::delete_batch::DeleteBatch;
    use partner_core_db::repository::load_batch::LoadBatch;
    use serial_test::serial;
    use uuid::Uuid;

    use super::super::test_utils::test_utils::create_test_partner;

    #[tokio::test]
    #[serial]
    async fn test_delete_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let partner_repo = &ctx.repos.partner_repository;

        let saved = partner_repo
            .create_batch(vec![
                create_test_partner("Doomed One"),
                create_test_partner("Doomed Two"),
            ])
            .await?;
        ctx.uow.tracker().drain();

        let ids: Vec<Uuid> = saved.iter().map(|p| p.id).collect();
        let deleted = partner_repo.delete_batch(&ids).await?;
        assert_eq!(deleted, 2);

        let loaded = partner_repo.load_batch(&ids).await?;
        assert!(loaded.iter().all(|p| p.is_none()));

        let changes = ctx.uow.tracker().drain();
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.action == ChangeAction::Deleted));

        ctx.uow.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_batch_unknown_ids_are_skipped()
    -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let deleted = ctx
            .repos
            .partner_repository
            .delete_batch(&[Uuid::new_v4()])
            .await?;
        assert_eq!(deleted, 0);
        assert!(ctx.uow.tracker().is_empty());
        ctx.uow.rollback().await?;
        Ok(())
    }
}
