use embodied_core_api::{ApiError, ApiResult, MATERIAL_CATEGORIES};
use embodied_core_db::models::catalog::CatalogRecordModel;
use embodied_core_db::models::keyed::Keyed;
use embodied_core_db::models::material::{MaterialModel, MaterialOverrides, NewMaterial};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::utils::read_catalog_records;

struct CatalogIndex {
    /// Records keyed by material name, in catalog order
    records: IndexMap<String, CatalogRecordModel>,
    /// Catalog ID to material name
    names_by_id: HashMap<String, String>,
}

impl CatalogIndex {
    fn build(records: Vec<CatalogRecordModel>) -> Self {
        let mut index = CatalogIndex {
            records: IndexMap::with_capacity(records.len()),
            names_by_id: HashMap::with_capacity(records.len()),
        };
        for record in records {
            let name = record.get_key().to_string();
            if index.records.contains_key(&name) {
                warn!(name = %name, "Duplicate catalog record, keeping the last one");
            }
            index.names_by_id.insert(record.id.clone(), name.clone());
            index.records.insert(name, record);
        }
        index
    }
}

/// Material catalog held in memory and keyed by material name.
///
/// Records can also be looked up by their catalog `ID`, or by a
/// `"<name> | (<functional unit>)"` selection label.
pub struct MaterialCatalogRepositoryImpl {
    index: RwLock<CatalogIndex>,
}

impl MaterialCatalogRepositoryImpl {
    pub fn new(records: Vec<CatalogRecordModel>) -> Self {
        info!(records = records.len(), "Material catalog loaded");
        Self {
            index: RwLock::new(CatalogIndex::build(records)),
        }
    }

    /// Loads the catalog from a JSON array of records
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let records = read_catalog_records(path)?;
        Ok(Self::new(records))
    }

    /// Replaces the whole catalog, e.g. with a custom database
    pub fn replace_records(&self, records: Vec<CatalogRecordModel>) {
        info!(records = records.len(), "Material catalog replaced");
        *self.index.write() = CatalogIndex::build(records);
    }

    pub fn len(&self) -> usize {
        self.index.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.read().records.is_empty()
    }

    /// Resolves a name, selection label or catalog ID to a record
    pub(super) fn lookup(&self, key: &str) -> Option<CatalogRecordModel> {
        let index = self.index.read();
        let name = MaterialModel::strip_selection_label(key);
        index
            .records
            .get(name)
            .or_else(|| index.names_by_id.get(key).and_then(|name| index.records.get(name)))
            .cloned()
    }

    pub(super) fn lookup_or_not_found(&self, key: &str) -> ApiResult<CatalogRecordModel> {
        self.lookup(key)
            .ok_or_else(|| ApiError::NotFound(format!("Material not found: {key}")))
    }

    pub(super) fn records_in_category(&self, category: &str) -> Vec<CatalogRecordModel> {
        let index = self.index.read();
        let mut records: Vec<CatalogRecordModel> = index
            .records
            .values()
            .filter(|record| record.category == category)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }

    /// Builds a material from a catalog record, applying user overrides.
    ///
    /// # Arguments
    /// * `key` - A material name, selection label or catalog ID
    /// * `overrides` - Wastage, service life, comments and coefficient reductions
    ///
    /// # Returns
    /// * `Err(ApiError::NotFound)` - No record matches `key`
    /// * `Err(ApiError::ValidationError)` - The record lacks a coefficient or functional unit
    pub fn load_material(&self, key: &str, overrides: &MaterialOverrides) -> ApiResult<MaterialModel> {
        let record = self.lookup_or_not_found(key)?;
        debug!(name = %record.name, id = %record.id, "Building material from catalog record");
        MaterialModel::new(NewMaterial::from_catalog_record(&record, overrides)?)
    }

    /// `"<name> | (<functional unit>)"` labels of every material in `category`
    pub fn selection_labels(&self, category: &str) -> Vec<String> {
        self.records_in_category(category)
            .iter()
            .map(|record| {
                MaterialModel::selection_label(&record.name, record.functional_unit.as_deref().unwrap_or_default())
            })
            .collect()
    }

    /// Selection labels grouped under each standard category, in category order
    pub fn category_selection_labels(&self) -> Vec<(&'static str, Vec<String>)> {
        MATERIAL_CATEGORIES
            .iter()
            .map(|category| (*category, self.selection_labels(category)))
            .collect()
    }
}
