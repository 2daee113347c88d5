use partner_core_db::audit::change_set::ChangeTracker;
use std::sync::Arc;

use crate::unit_of_work::Executor;

/// Maintains the document type lookup table.
pub struct DocumentTypeRepositoryImpl {
    pub(crate) executor: Executor,
    pub(crate) tracker: Arc<ChangeTracker>,
}

impl DocumentTypeRepositoryImpl {
    pub fn new(executor: Executor, tracker: Arc<ChangeTracker>) -> Self {
        Self { executor, tracker }
    }
}
