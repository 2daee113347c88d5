use async_trait::async_trait;
use sqlx::Database;

use crate::models::auditable::Auditable;

/// Generic repository trait for updating multiple entities in a batch
///
/// This trait provides a standard interface for batch updating entities in a data store.
/// The implementation loads the stored state of every item first and records the
/// (before, after) snapshot pair with the session's change tracker; the audit pass
/// later decides whether the update produced any visible field deltas.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement the Auditable trait
///
/// # Example
/// ```ignore
/// impl UpdateBatch<Postgres, PartnerModel> for PartnerRepositoryImpl {
///     async fn update_batch(&self, items: Vec<PartnerModel>) -> Result<Vec<PartnerModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait UpdateBatch<DB: Database, T: Auditable>: Send + Sync {
    /// Update multiple items on the session transaction
    ///
    /// # Arguments
    /// * `items` - A vector of entities to update
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of updated entities with bumped concurrency tokens
    /// * `Err` - An error if the statements could not be executed or an item does not exist
    async fn update_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
