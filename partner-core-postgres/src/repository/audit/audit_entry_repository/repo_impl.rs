use partner_core_db::audit::entry::AuditEntryModel;
use sqlx::postgres::PgRow;
use sqlx::Row;
use std::error::Error;
use uuid::Uuid;

use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};

/// The audit record emitter: appends immutable trail rows to the open
/// transaction of a unit of work. Rows become visible only if that
/// transaction commits. The engine never updates or deletes entries;
/// `find_by_record_id` exists so tests can observe committed rows.
pub struct AuditEntryRepositoryImpl {
    pub(crate) executor: Executor,
}

impl AuditEntryRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    pub async fn append(
        &self,
        entries: &[AuditEntryModel],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::append_impl(self, entries).await
    }

    pub async fn find_by_record_id(
        &self,
        record_id: Uuid,
    ) -> Result<Vec<AuditEntryModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_record_id_impl(self, record_id).await
    }
}

impl TryFromRow<PgRow> for AuditEntryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AuditEntryModel {
            id: row.try_get("id")?,
            record_kind: row.try_get("record_kind")?,
            record_id: row.try_get("record_id")?,
            action: row.try_get("action")?,
            actor_id: row.try_get("actor_id")?,
            actor_name: get_heapless_string(row, "actor_name")?,
            recorded_at: row.try_get("recorded_at")?,
            narrative: row.try_get("narrative")?,
        })
    }
}
