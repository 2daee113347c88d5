pub mod auditable;
pub mod identifiable;
pub mod communication;
pub mod document;
pub mod partner;
pub mod user;

// Re-exports
pub use auditable::*;
pub use identifiable::*;
pub use communication::*;
pub use document::*;
pub use partner::*;
pub use user::*;
