use partner_core_db::audit::entry::AuditEntryModel;

use super::repo_impl::AuditEntryRepositoryImpl;

impl AuditEntryRepositoryImpl {
    /// Appends the pass's entries to the open transaction. Does not
    /// commit; the unit of work owns the commit.
    pub(super) async fn append_impl(
        repo: &AuditEntryRepositoryImpl,
        entries: &[AuditEntryModel],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO audit_entry (id, record_kind, record_id, action, actor_id, actor_name, recorded_at, narrative)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(entry.id)
            .bind(entry.record_kind)
            .bind(entry.record_id)
            .bind(entry.action)
            .bind(entry.actor_id)
            .bind(entry.actor_name.as_str())
            .bind(entry.recorded_at)
            .bind(entry.narrative.as_str())
            .execute(&mut **transaction)
            .await?;
        }

        Ok(())
    }
}
