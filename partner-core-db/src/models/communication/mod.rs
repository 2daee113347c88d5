#[allow(clippy::module_inception)]
pub mod communication;
pub mod communication_status;
pub mod communication_type;

pub use communication::*;
pub use communication_status::*;
pub use communication_type::*;
