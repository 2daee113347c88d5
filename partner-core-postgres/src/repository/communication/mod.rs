pub mod communication_repository;
pub mod communication_status_repository;
pub mod communication_type_repository;

pub use communication_repository::CommunicationRepositoryImpl;
pub use communication_status_repository::CommunicationStatusRepositoryImpl;
pub use communication_type_repository::CommunicationTypeRepositoryImpl;
