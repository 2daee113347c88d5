pub mod partner_repository;
pub mod site_repository;

pub use partner_repository::PartnerRepositoryImpl;
pub use site_repository::SiteRepositoryImpl;
