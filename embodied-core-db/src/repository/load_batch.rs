use async_trait::async_trait;
use embodied_core_api::ApiResult;

use crate::models::keyed::Keyed;

/// Generic repository trait for loading multiple records by their keys
///
/// Returns items in the same order as the provided keys.
/// Missing items are represented as None in the result.
///
/// # Type Parameters
/// * `T` - The record type that must implement Keyed trait
#[async_trait]
pub trait LoadBatch<T: Keyed>: Send + Sync {
    /// Load multiple records by their keys
    ///
    /// # Arguments
    /// * `keys` - A slice of keys of the records to load
    ///
    /// # Returns
    /// * `Ok(Vec<Option<T>>)` - A vector of optional records in the same order as the provided keys
    ///   - `Some(T)` for records that exist
    ///   - `None` for records that do not exist
    /// * `Err` - An error if the lookup could not be executed
    async fn load_batch(&self, keys: &[&str]) -> ApiResult<Vec<Option<T>>>;
}
