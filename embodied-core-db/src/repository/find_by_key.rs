use async_trait::async_trait;
use embodied_core_api::ApiResult;

use crate::models::keyed::Keyed;

/// Generic repository trait for finding records by their key
///
/// Returns an Option to handle cases where the record might not exist.
///
/// # Type Parameters
/// * `T` - The record type that must implement Keyed trait
#[async_trait]
pub trait FindByKey<T: Keyed>: Send + Sync {
    /// Find a record by its key
    ///
    /// # Arguments
    /// * `key` - The key of the record to find
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found record
    /// * `Ok(None)` - If the record does not exist
    /// * `Err` - An error if the lookup could not be executed
    async fn find_by_key(&self, key: &str) -> ApiResult<Option<T>>;
}
