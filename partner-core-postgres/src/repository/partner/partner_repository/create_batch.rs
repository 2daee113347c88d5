use async_trait::async_trait;
use partner_core_db::models::partner::PartnerModel;
use partner_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::PartnerRepositoryImpl;

impl PartnerRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &PartnerRepositoryImpl,
        items: Vec<PartnerModel>,
    ) -> Result<Vec<PartnerModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::new();

        // Acquire lock once and do all database operations
        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for item in items {
                sqlx::query(
                    r#"
                    INSERT INTO partner (id, name, email, phone, street, city, created_at, updated_at, row_version)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    "#,
                )
                .bind(item.id)
                .bind(item.name.as_str())
                .bind(item.email.as_ref().map(|s| s.as_str()))
                .bind(item.phone.as_ref().map(|s| s.as_str()))
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
impl CreateBatch<Postgres, PartnerModel> for PartnerRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<PartnerModel>,
    ) -> Result<Vec<PartnerModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use partner_core_db::audit::change_set::ChangeAction;
    use partner_core_db::repository::create_batch::CreateBatch;
    use partner_core_db::repository::load_batch::LoadBatch;
    use serial_test::serial;
    use uuid::Uuid;

    use super::super::test_utils::test_utils::create_test_partner;

    #[tokio::test]
    #[serial]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let partner_repo = &ctx.repos.partner_repository;

        let mut partners = Vec::new();
        for i in 0..5 {
            partners.push(create_test_partner(&format!("Test Partner {i}")));
        }

        let saved_partners = partner_repo.create_batch(partners.clone()).await?;
        assert_eq!(saved_partners.len(), 5);

        let ids: Vec<Uuid> = saved_partners.iter().map(|p| p.id).collect();
        let loaded = partner_repo.load_batch(&ids).await?;
        for partner_opt in loaded {
            let partner = partner_opt.unwrap();
            assert!(partner.name.as_str().starts_with("Test Partner"));
        }

        ctx.uow.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_create_batch_tracks_created_mutations()
    -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let partner_repo = &ctx.repos.partner_repository;

        partner_repo
            .create_batch(vec![create_test_partner("Tracked Partner")])
            .await?;

        let changes = ctx.uow.tracker().drain();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].action, ChangeAction::Created);

        ctx.uow.rollback().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_create_batch_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let saved = ctx.repos.partner_repository.create_batch(Vec::new()).await?;
        assert!(saved.is_empty());
        assert!(ctx.uow.tracker().is_empty());
        ctx.uow.rollback().await?;
        Ok(())
    }
}
