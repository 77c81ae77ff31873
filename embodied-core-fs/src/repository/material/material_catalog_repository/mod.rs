pub mod repo_impl;
pub mod find_by_key;
pub mod list_by_category;
pub mod load;
pub mod load_batch;
pub mod query_attributes;

pub use repo_impl::MaterialCatalogRepositoryImpl;

#[cfg(test)]
pub mod test_utils;
