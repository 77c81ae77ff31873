use async_trait::async_trait;
use embodied_core_api::ApiResult;
use embodied_core_db::models::catalog::CatalogRecordModel;
use embodied_core_db::repository::list_by_category::ListByCategory;

use super::repo_impl::MaterialCatalogRepositoryImpl;

#[async_trait]
impl ListByCategory<CatalogRecordModel> for MaterialCatalogRepositoryImpl {
    async fn list_by_category(&self, category: &str) -> ApiResult<Vec<CatalogRecordModel>> {
        Ok(self.records_in_category(category))
    }
}
