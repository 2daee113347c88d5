pub mod append;
pub mod find_by_record_id;
pub mod repo_impl;

pub use repo_impl::AuditEntryRepositoryImpl;
