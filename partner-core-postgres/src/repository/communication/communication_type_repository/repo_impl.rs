use partner_core_db::audit::change_set::ChangeTracker;
use std::sync::Arc;

use crate::unit_of_work::Executor;

/// Maintains the communication type lookup table. Audited through the
/// generic narrator; reference resolution reads the table directly.
pub struct CommunicationTypeRepositoryImpl {
    pub(crate) executor: Executor,
    pub(crate) tracker: Arc<ChangeTracker>,
}

impl CommunicationTypeRepositoryImpl {
    pub fn new(executor: Executor, tracker: Arc<ChangeTracker>) -> Self {
        Self { executor, tracker }
    }
}
