use async_trait::async_trait;
use partner_core_db::models::document::DocumentModel;
use partner_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::DocumentRepositoryImpl;

impl DocumentRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &DocumentRepositoryImpl,
        items: Vec<DocumentModel>,
    ) -> Result<Vec<DocumentModel>, Box<dyn Error + Send + Sync>> {
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
                    INSERT INTO document (id, partner_id, document_type_id, file_name, description,
                        archived, created_at, updated_at, row_version)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    "#,
                )
                .bind(item.id)
                .bind(item.partner_id)
                .bind(item.document_type_id)
                .bind(item.file_name.as_str())
                .bind(item.description.as_ref().map(|s| s.as_str()))
                .bind(item.archived)
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
impl CreateBatch<Postgres, DocumentModel> for DocumentRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<DocumentModel>,
    ) -> Result<Vec<DocumentModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::audit::audit_entry_repository::AuditEntryRepositoryImpl;
    use crate::repository::partner::partner_repository::test_utils::test_utils::create_test_partner;
    use crate::test_helper::{setup_test_context, test_actor};
    use crate::unit_of_work::UnitOfWork;
    use partner_core_db::audit::change_set::ChangeAction;
    use partner_core_db::repository::create_batch::CreateBatch;
    use serial_test::serial;

    use super::super::test_utils::test_utils::{create_test_document, seed_document_type};

    #[tokio::test]
    #[serial]
    async fn test_created_document_narrates_type_and_partner()
    -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let partner = create_test_partner("Acme Files");

        ctx.repos
            .partner_repository
            .create_batch(vec![partner.clone()])
            .await?;
        let type_id = seed_document_type(&ctx.repos, "Contract").await?;
        let document = create_test_document(partner.id, type_id, "msa-2024.pdf");
        ctx.repos
            .document_repository
            .create_batch(vec![document.clone()])
            .await?;
        ctx.uow.commit().await?;

        let verify = UnitOfWork::begin(&ctx.pool, ctx.engine.clone(), test_actor()).await?;
        let audit_repo = AuditEntryRepositoryImpl::new(verify.executor());
        let entries = audit_repo.find_by_record_id(document.id).await?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, ChangeAction::Created);
        assert_eq!(
            entries[0].narrative,
            "Created Contract document \"msa-2024.pdf\" for partner Acme Files"
        );
        verify.rollback().await?;

        Ok(())
    }
}
