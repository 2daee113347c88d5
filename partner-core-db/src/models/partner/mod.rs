#[allow(clippy::module_inception)]
pub mod partner;
pub mod site;

pub use partner::*;
pub use site::*;
