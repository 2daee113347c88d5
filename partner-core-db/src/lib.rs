pub mod audit;
pub mod models;
pub mod repository;
