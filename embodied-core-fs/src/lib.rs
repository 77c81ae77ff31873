pub mod config;
pub mod fs_repositories;
pub mod report;
pub mod repository;
pub mod utils;

pub use config::ExportConfig;
pub use fs_repositories::{CatalogRepositories, FsRepositories};
pub use repository::material::MaterialCatalogRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
