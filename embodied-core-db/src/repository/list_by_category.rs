use async_trait::async_trait;
use embodied_core_api::ApiResult;

use crate::models::keyed::Keyed;

/// Repository trait for listing records of a category
///
/// # Type Parameters
/// * `T` - The record type that must implement Keyed trait
#[async_trait]
pub trait ListByCategory<T: Keyed>: Send + Sync {
    /// List the records of a category, sorted by key
    ///
    /// # Arguments
    /// * `category` - The category name, e.g. `"3: Metals"`
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The records, empty if the category has none
    async fn list_by_category(&self, category: &str) -> ApiResult<Vec<T>>;
}
