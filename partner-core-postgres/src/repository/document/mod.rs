pub mod document_repository;
pub mod document_type_repository;

pub use document_repository::DocumentRepositoryImpl;
pub use document_type_repository::DocumentTypeRepositoryImpl;
