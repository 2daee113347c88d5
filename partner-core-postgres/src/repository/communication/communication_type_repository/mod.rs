pub mod create_batch;
pub mod repo_impl;

pub use repo_impl::CommunicationTypeRepositoryImpl;
