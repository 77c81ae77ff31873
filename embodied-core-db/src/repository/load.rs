use async_trait::async_trait;
use embodied_core_api::ApiResult;

use crate::models::keyed::Keyed;

/// Generic repository trait for loading records by their key
///
/// This trait provides a standard interface for loading records from a catalog.
/// Any record that implements the Keyed trait can be loaded using this trait.
///
/// # Type Parameters
/// * `T` - The record type that must implement Keyed trait
///
/// # Example
/// ```ignore
/// impl Load<CatalogRecordModel> for MaterialCatalogRepositoryImpl {
///     async fn load(&self, key: &str) -> ApiResult<CatalogRecordModel> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<T: Keyed>: Send + Sync {
    /// Load a record by its key
    ///
    /// # Arguments
    /// * `key` - The key of the record to load
    ///
    /// # Returns
    /// * `Ok(T)` - The loaded record
    /// * `Err(ApiError::NotFound)` - If no record has this key
    async fn load(&self, key: &str) -> ApiResult<T>;
}
