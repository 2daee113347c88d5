use async_trait::async_trait;
use sqlx::Database;

use crate::models::auditable::Auditable;

/// Generic repository trait for creating multiple entities in a batch
///
/// This trait provides a standard interface for batch creating entities in a data store.
/// All creates run on the session's shared transaction and are recorded with the
/// session's change tracker, so the audit pass sees one Created mutation per item.
/// Returns saved items with any generated fields populated.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement the Auditable trait
///
/// # Example
/// ```ignore
/// impl CreateBatch<Postgres, PartnerModel> for PartnerRepositoryImpl {
///     async fn create_batch(&self, items: Vec<PartnerModel>) -> Result<Vec<PartnerModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<DB: Database, T: Auditable>: Send + Sync {
    /// Save multiple items on the session transaction
    ///
    /// # Arguments
    /// * `items` - A vector of entities to create
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of created entities
    /// * `Err` - An error if the statements could not be executed
    async fn create_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
