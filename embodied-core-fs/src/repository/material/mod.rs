pub mod material_catalog_repository;

pub use material_catalog_repository::MaterialCatalogRepositoryImpl;
