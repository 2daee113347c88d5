use std::sync::Arc;

use crate::repository::audit::audit_entry_repository::AuditEntryRepositoryImpl;
use crate::repository::communication::{
    CommunicationRepositoryImpl, CommunicationStatusRepositoryImpl, CommunicationTypeRepositoryImpl,
};
use crate::repository::document::{DocumentRepositoryImpl, DocumentTypeRepositoryImpl};
use crate::repository::partner::{PartnerRepositoryImpl, SiteRepositoryImpl};
use crate::repository::user::UserRepositoryImpl;
use crate::unit_of_work::UnitOfWork;

/// All repositories of one unit of work, sharing its transaction and
/// change tracker. Build once per session; never reuse across sessions.
pub struct SessionRepositories {
    pub partner_repository: Arc<PartnerRepositoryImpl>,
    pub site_repository: Arc<SiteRepositoryImpl>,
    pub communication_repository: Arc<CommunicationRepositoryImpl>,
    pub communication_type_repository: Arc<CommunicationTypeRepositoryImpl>,
    pub communication_status_repository: Arc<CommunicationStatusRepositoryImpl>,
    pub document_repository: Arc<DocumentRepositoryImpl>,
    pub document_type_repository: Arc<DocumentTypeRepositoryImpl>,
    pub user_repository: Arc<UserRepositoryImpl>,
    pub audit_entry_repository: Arc<AuditEntryRepositoryImpl>,
}

impl SessionRepositories {
    pub fn new(session: &UnitOfWork) -> Self {
        let executor = session.executor();
        let tracker = session.tracker();

        Self {
            partner_repository: Arc::new(PartnerRepositoryImpl::new(
                executor.clone(),
                tracker.clone(),
            )),
            site_repository: Arc::new(SiteRepositoryImpl::new(executor.clone(), tracker.clone())),
            communication_repository: Arc::new(CommunicationRepositoryImpl::new(
                executor.clone(),
                tracker.clone(),
            )),
            communication_type_repository: Arc::new(CommunicationTypeRepositoryImpl::new(
                executor.clone(),
                tracker.clone(),
            )),
            communication_status_repository: Arc::new(CommunicationStatusRepositoryImpl::new(
                executor.clone(),
                tracker.clone(),
            )),
            document_repository: Arc::new(DocumentRepositoryImpl::new(
                executor.clone(),
                tracker.clone(),
            )),
            document_type_repository: Arc::new(DocumentTypeRepositoryImpl::new(
                executor.clone(),
                tracker.clone(),
            )),
            user_repository: Arc::new(UserRepositoryImpl::new(executor.clone(), tracker)),
            audit_entry_repository: Arc::new(AuditEntryRepositoryImpl::new(executor)),
        }
    }
}
