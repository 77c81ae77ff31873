use async_trait::async_trait;
use embodied_core_api::ApiResult;
use embodied_core_db::models::catalog::CatalogRecordModel;
use embodied_core_db::repository::load::Load;

use super::repo_impl::MaterialCatalogRepositoryImpl;

#[async_trait]
impl Load<CatalogRecordModel> for MaterialCatalogRepositoryImpl {
    async fn load(&self, key: &str) -> ApiResult<CatalogRecordModel> {
        self.lookup_or_not_found(key)
    }
}
