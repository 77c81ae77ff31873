use embodied_core_db::models::catalog::CatalogRecordModel;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::repository::material::MaterialCatalogRepositoryImpl;
use crate::utils::read_catalog_records;

/// Catalog records backing the file system repositories
pub struct FsRepositories {
    records: Vec<CatalogRecordModel>,
}

impl FsRepositories {
    pub fn new(records: Vec<CatalogRecordModel>) -> Self {
        Self { records }
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let records = read_catalog_records(path)?;
        info!(path = %path.display(), records = records.len(), "Catalog file read");
        Ok(Self::new(records))
    }

    /// Create all catalog repositories over a snapshot of the records
    pub fn create_catalog_repositories(&self) -> CatalogRepositories {
        CatalogRepositories {
            material_catalog_repository: Arc::new(MaterialCatalogRepositoryImpl::new(self.records.clone())),
        }
    }
}

pub struct CatalogRepositories {
    pub material_catalog_repository: Arc<MaterialCatalogRepositoryImpl>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::material::material_catalog_repository::test_utils::test_utils::create_test_records;
    use embodied_core_db::repository::load::Load;

    #[test]
    fn test_repositories_share_no_state() {
        let repos = FsRepositories::new(create_test_records());
        let first = repos.create_catalog_repositories();
        let second = repos.create_catalog_repositories();

        first.material_catalog_repository.replace_records(vec![]);

        assert!(first.material_catalog_repository.is_empty());
        let brick = tokio_test::block_on(second.material_catalog_repository.load("Brick")).unwrap();
        assert_eq!(brick.id, "1001");
    }
}
