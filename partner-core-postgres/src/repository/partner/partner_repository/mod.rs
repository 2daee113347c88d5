pub mod create_batch;
pub mod delete_batch;
pub mod load_batch;
pub mod repo_impl;
pub mod update_batch;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::PartnerRepositoryImpl;
