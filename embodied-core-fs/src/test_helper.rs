//! Test helper module for catalog-backed tests
//!
//! Builds the catalog repositories either from the JSON file named by
//! `EMBODIED_CATALOG_PATH` or, when it is not set, from in-memory fixture records.

use crate::fs_repositories::{CatalogRepositories, FsRepositories};
use crate::repository::material::material_catalog_repository::test_utils::test_utils::create_test_records;
use std::path::PathBuf;

pub const CATALOG_PATH_ENV: &str = "EMBODIED_CATALOG_PATH";

/// Test context holding ready catalog repositories
pub struct TestContext {
    pub catalog_repos: CatalogRepositories,
}

impl TestContext {
    /// Get the catalog repositories from the context
    pub fn catalog_repos(&self) -> &CatalogRepositories {
        &self.catalog_repos
    }
}

/// Setup a test context with a loaded material catalog
///
/// # Example
///
/// ```ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let catalog = &ctx.catalog_repos().material_catalog_repository;
///
///     // Perform test operations...
///
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let repos = match std::env::var_os(CATALOG_PATH_ENV) {
        Some(path) => FsRepositories::from_json_file(&PathBuf::from(path))?,
        None => FsRepositories::new(create_test_records()),
    };
    Ok(TestContext {
        catalog_repos: repos.create_catalog_repositories(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use embodied_core_api::Flow;
    use embodied_core_db::models::analysis::{AnalysisModel, NewAnalysis};
    use embodied_core_db::models::assembly::{AssemblyModel, MaterialQuantity, NewAssembly};
    use embodied_core_db::models::breakdown::HybridBreakdown;
    use embodied_core_db::models::material::MaterialOverrides;
    use embodied_core_db::repository::list_by_category::ListByCategory;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_catalog_to_analysis() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let catalog = &ctx.catalog_repos().material_catalog_repository;

        let metals = catalog.list_by_category("3: Metals").await?;
        assert!(!metals.is_empty());

        let material = Arc::new(catalog.load_material(&metals[0].name, &MaterialOverrides::default())?);
        let assembly = AssemblyModel::new(
            NewAssembly {
                name: Some("Frame".to_string()),
                assembly_units: "m".to_string(),
                materials: vec![MaterialQuantity::new(Arc::clone(&material), 2.0)],
                ..Default::default()
            },
            vec![3.0],
        )?;
        let analysis = AnalysisModel::new(NewAnalysis::named("Report", Some(60)), vec![assembly.into()])?;

        assert!(analysis.flows().totals.initial.energy > 0.0);
        let energy = analysis.breakdown().get(Flow::Energy).unwrap();
        assert_relative_eq!(energy.process, material.process_shares.get(Flow::Energy).unwrap(), epsilon = 1e-12);
        Ok(())
    }
}
