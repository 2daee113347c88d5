pub mod audit;
pub mod communication;
pub mod document;
pub mod partner;
pub mod user;
