use async_trait::async_trait;
use embodied_core_api::ApiResult;
use embodied_core_db::models::catalog::AttributeValue;
use embodied_core_db::repository::query_attributes::QueryAttributes;

use super::repo_impl::MaterialCatalogRepositoryImpl;

#[async_trait]
impl QueryAttributes for MaterialCatalogRepositoryImpl {
    async fn query_attribute(&self, key: &str, attribute: &str) -> ApiResult<Option<AttributeValue>> {
        self.lookup_or_not_found(key)?.attribute(attribute)
    }

    async fn query_attributes(&self, key: &str, attributes: &[&str]) -> ApiResult<Vec<Option<AttributeValue>>> {
        Ok(self.lookup_or_not_found(key)?.attributes(attributes))
    }
}
