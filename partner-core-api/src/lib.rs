pub mod actor;
pub mod error;

pub use actor::*;
pub use error::*;
