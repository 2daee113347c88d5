use async_trait::async_trait;
use partner_core_db::models::communication::CommunicationModel;
use partner_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CommunicationRepositoryImpl;

impl CommunicationRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &CommunicationRepositoryImpl,
        items: Vec<CommunicationModel>,
    ) -> Result<Vec<CommunicationModel>, Box<dyn Error + Send + Sync>> {
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
                    INSERT INTO communication (id, partner_id, site_id, communication_type_id,
                        communication_status_id, assigned_user_id, subject, details, occurred_at,
                        created_at, updated_at, row_version)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
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
impl CreateBatch<Postgres, CommunicationModel> for CommunicationRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<CommunicationModel>,
    ) -> Result<Vec<CommunicationModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::audit::audit_entry_repository::AuditEntryRepositoryImpl;
    use crate::repository::partner::partner_repository::test_utils::test_utils::create_test_partner;
    use crate::repository::partner::site_repository::test_utils::test_utils::create_test_site;
    use crate::test_helper::{setup_test_context, test_actor};
    use crate::unit_of_work::UnitOfWork;
    use partner_core_db::audit::change_set::ChangeAction;
    use partner_core_db::repository::create_batch::CreateBatch;
    use serial_test::serial;

    use super::super::test_utils::test_utils::{
        create_test_communication, seed_communication_lookups,
    };

    #[tokio::test]
    #[serial]
    async fn test_created_communication_narrates_resolved_context()
    -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let partner = create_test_partner("Acme Context");
        let site = create_test_site(partner.id, "North Plant");

        ctx.repos
            .partner_repository
            .create_batch(vec![partner.clone()])
            .await?;
        ctx.repos
            .site_repository
            .create_batch(vec![site.clone()])
            .await?;
        let (type_id, status_id) = seed_communication_lookups(&ctx.repos).await?;

        let mut communication =
            create_test_communication(partner.id, type_id, status_id, "Line inspection");
        communication.site_id = Some(site.id);
        ctx.repos
            .communication_repository
            .create_batch(vec![communication.clone()])
            .await?;
        ctx.uow.commit().await?;

        let verify = UnitOfWork::begin(&ctx.pool, ctx.engine.clone(), test_actor()).await?;
        let audit_repo = AuditEntryRepositoryImpl::new(verify.executor());
        let entries = audit_repo.find_by_record_id(communication.id).await?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, ChangeAction::Created);
        assert_eq!(
            entries[0].narrative,
            "Created Phone call communication \"Line inspection\" for Acme Context at North Plant with status Open"
        );
        verify.rollback().await?;

        Ok(())
    }
}
