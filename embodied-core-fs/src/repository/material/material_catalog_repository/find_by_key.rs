use async_trait::async_trait;
use embodied_core_api::ApiResult;
use embodied_core_db::models::catalog::CatalogRecordModel;
use embodied_core_db::repository::find_by_key::FindByKey;

use super::repo_impl::MaterialCatalogRepositoryImpl;

#[async_trait]
impl FindByKey<CatalogRecordModel> for MaterialCatalogRepositoryImpl {
    async fn find_by_key(&self, key: &str) -> ApiResult<Option<CatalogRecordModel>> {
        Ok(self.lookup(key))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::create_test_records;
    use super::*;

    #[tokio::test]
    async fn test_find_by_key() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = MaterialCatalogRepositoryImpl::new(create_test_records());

        let found = repo.find_by_key("3001").await?;
        assert_eq!(found.map(|record| record.name), Some("Steel".to_string()));

        let missing = repo.find_by_key("9999").await?;
        assert!(missing.is_none());

        Ok(())
    }
}
