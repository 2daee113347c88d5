pub mod lookup;
pub mod postgres_repositories;
pub mod repository;
pub mod unit_of_work;
pub mod utils;

pub use lookup::PgLookupSource;
pub use postgres_repositories::SessionRepositories;
pub use unit_of_work::{Executor, UnitOfWork};

#[cfg(test)]
pub mod test_helper;
