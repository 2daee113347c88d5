use async_trait::async_trait;
use partner_core_db::models::partner::PartnerModel;
use partner_core_db::repository::load_batch::LoadBatch;
use partner_core_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::PartnerRepositoryImpl;

impl PartnerRepositoryImpl {
    pub(super) async fn update_batch_impl(
        &self,
        items: Vec<PartnerModel>,
    ) -> Result<Vec<PartnerModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        // Load the stored state first: it is both the optimistic-lock
        // baseline and the original snapshot the audit diff runs against.
        let ids: Vec<Uuid> = items.iter().map(|item| item.id).collect();
        let originals = self.load_batch(&ids).await?;

        let mut updated_pairs = Vec::new();

        {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for (mut item, original) in items.into_iter().zip(originals) {
                let original =
                    original.ok_or_else(|| format!("Partner {} not found", item.id))?;
                item.row_version = original.row_version + 1;

                sqlx::query(
                    r#"
                    UPDATE partner
                    SET name = $2, email = $3, phone = $4, street = $5, city = $6, updated_at = $7, row_version = $8
                    WHERE id = $1
                    "#,
                )
                .bind(item.id)
                .bind(item.name.as_str())
                .bind(item.email.as_ref().map(|s| s.as_str()))
                .bind(item.phone.as_ref().map(|s| s.as_str()))
                .bind(item.street.as_ref().map(|s| s.as_str()))
                .bind(item.city.as_ref().map(|s| s.as_str()))
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
impl UpdateBatch<Postgres, PartnerModel> for PartnerRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<PartnerModel>,
    ) -> Result<Vec<PartnerModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use heapless::String as HeaplessString;
    use partner_core_db::audit::change_set::ChangeAction;
    use partner_core_db::repository::create_batch::CreateBatch;
    use partner_core_db::repository::load_batch::LoadBatch;
    use partner_core_db::repository::update_batch::UpdateBatch;
    use serial_test::serial;
    use uuid::Uuid;

    use super::super::test_utils::test_utils::create_test_partner;

    #[tokio::test]
    #[serial]
    async fn test_update_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let partner_repo = &ctx.repos.partner_repository;

        let saved = partner_repo
            .create_batch(vec![create_test_partner("Before Rename")])
            .await?;

        let mut partner = saved.into_iter().next().unwrap();
        partner.name = HeaplessString::try_from("After Rename").unwrap();
        let updated = partner_repo.update_batch(vec![partner]).await?;

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].row_version, 1);

        let ids: Vec<Uuid> = updated.iter().map(|p| p.id).collect();
        let loaded = partner_repo.load_batch(&ids).await?;
        assert_eq!(
            loaded[0].as_ref().unwrap().name.as_str(),
            "After Rename"
        );

        ctx.uow.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_update_batch_tracks_before_and_after()
    -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let partner_repo = &ctx.repos.partner_repository;

        let saved = partner_repo
            .create_batch(vec![create_test_partner("Original Name")])
            .await?;
        ctx.uow.tracker().drain();

        let mut partner = saved.into_iter().next().unwrap();
        partner.name = HeaplessString::try_from("Changed Name").unwrap();
        partner_repo.update_batch(vec![partner]).await?;

        let changes = ctx.uow.tracker().drain();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].action, ChangeAction::Updated);
        assert!(changes[0].original.is_some());
        assert!(changes[0].current.is_some());

        ctx.uow.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_update_batch_missing_partner_fails()
    -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let result = ctx
            .repos
            .partner_repository
            .update_batch(vec![create_test_partner("Ghost")])
            .await;
        assert!(result.is_err());
        ctx.uow.rollback().await?;
        Ok(())
    }
}
