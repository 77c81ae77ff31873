use anyhow::Context;
use embodied_core_db::models::catalog::CatalogRecordModel;
use std::fs;
use std::path::Path;

/// Reads a JSON array of catalog records.
pub fn read_catalog_records(path: &Path) -> anyhow::Result<Vec<CatalogRecordModel>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Couldn't load database from: {}", path.display()))?;
    let records: Vec<CatalogRecordModel> = serde_json::from_str(&json)
        .with_context(|| format!("Invalid catalog records in: {}", path.display()))?;
    Ok(records)
}

/// Replaces the CSV delimiter in free text.
pub fn sanitize_field(value: &str) -> String {
    value.replace(',', ".")
}
