use async_trait::async_trait;
use embodied_core_api::ApiResult;

use crate::models::catalog::AttributeValue;

/// Repository trait for reading single attributes of catalog records
#[async_trait]
pub trait QueryAttributes: Send + Sync {
    /// Query one attribute of a record
    ///
    /// # Arguments
    /// * `key` - The key of the record
    /// * `attribute` - The catalog field name, e.g. `"Functional Unit"`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The attribute value
    /// * `Ok(None)` - The record has no value for this attribute
    /// * `Err(ApiError::NotFound)` - The record or the attribute name does not exist
    async fn query_attribute(&self, key: &str, attribute: &str) -> ApiResult<Option<AttributeValue>>;

    /// Query several attributes of a record at once
    ///
    /// # Returns
    /// * `Ok(Vec<Option<AttributeValue>>)` - One entry per attribute, `None` for missing ones
    /// * `Err(ApiError::NotFound)` - The record does not exist
    async fn query_attributes(&self, key: &str, attributes: &[&str]) -> ApiResult<Vec<Option<AttributeValue>>>;
}
