use partner_core_db::audit::change_set::ChangeTracker;
use partner_core_db::models::communication::CommunicationStatusModel;
use sqlx::postgres::PgRow;
use sqlx::Row;
use std::error::Error;
use std::sync::Arc;

use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, TryFromRow};

/// Maintains the communication status lookup table. Renaming a status
/// rewrites what every referencing narrative resolves to from then on,
/// so status changes themselves are audited (generically).
pub struct CommunicationStatusRepositoryImpl {
    pub(crate) executor: Executor,
    pub(crate) tracker: Arc<ChangeTracker>,
}

impl CommunicationStatusRepositoryImpl {
    pub fn new(executor: Executor, tracker: Arc<ChangeTracker>) -> Self {
        Self { executor, tracker }
    }
}

impl TryFromRow<PgRow> for CommunicationStatusModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CommunicationStatusModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
