use partner_core_db::audit::entry::AuditEntryModel;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::AuditEntryRepositoryImpl;

impl AuditEntryRepositoryImpl {
    pub(super) async fn find_by_record_id_impl(
        repo: &AuditEntryRepositoryImpl,
        record_id: Uuid,
    ) -> Result<Vec<AuditEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT id, record_kind, record_id, action, actor_id, actor_name, recorded_at, narrative
            FROM audit_entry
            WHERE record_id = $1
            ORDER BY recorded_at, id
            "#,
        )
        .bind(record_id);

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            if let Some(transaction) = tx.as_mut() {
                query.fetch_all(&mut **transaction).await?
            } else {
                return Err("Transaction has been consumed".into());
            }
        };

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(AuditEntryModel::try_from_row(&row)?);
        }
        Ok(entries)
    }
}
