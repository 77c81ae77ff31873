use async_trait::async_trait;
use embodied_core_api::ApiResult;
use embodied_core_db::models::catalog::CatalogRecordModel;
use embodied_core_db::repository::load_batch::LoadBatch;

use super::repo_impl::MaterialCatalogRepositoryImpl;

impl MaterialCatalogRepositoryImpl {
    pub(super) fn load_batch_impl(&self, keys: &[&str]) -> Vec<Option<CatalogRecordModel>> {
        let mut result = Vec::with_capacity(keys.len());
        for key in keys {
            result.push(self.lookup(key));
        }
        result
    }
}

#[async_trait]
impl LoadBatch<CatalogRecordModel> for MaterialCatalogRepositoryImpl {
    async fn load_batch(&self, keys: &[&str]) -> ApiResult<Vec<Option<CatalogRecordModel>>> {
        Ok(self.load_batch_impl(keys))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::create_test_records;
    use super::*;

    #[tokio::test]
    async fn test_load_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = MaterialCatalogRepositoryImpl::new(create_test_records());

        let loaded = repo.load_batch(&["Steel", "Brick", "Carpet"]).await?;

        assert_eq!(loaded.len(), 3);
        let names: Vec<String> = loaded.into_iter().flatten().map(|record| record.name).collect();
        assert_eq!(names, vec!["Steel", "Brick", "Carpet"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_batch_with_non_existing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = MaterialCatalogRepositoryImpl::new(create_test_records());

        let loaded = repo.load_batch(&["Brick", "Marble"]).await?;

        assert_eq!(loaded.len(), 2);
        assert!(loaded[0].is_some());
        assert!(loaded[1].is_none());

        assert!(repo.load_batch(&[]).await?.is_empty());

        Ok(())
    }
}
