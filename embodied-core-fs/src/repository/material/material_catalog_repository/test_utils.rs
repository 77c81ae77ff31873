#[cfg(test)]
pub mod test_utils {
    use embodied_core_db::models::catalog::CatalogRecordModel;

    /// A `kg` record with 10 MJ, 20 L and 1 kgCO2e per unit, 10% wastage and no replacement
    pub fn create_test_record(id: &str, name: &str, category: &str) -> CatalogRecordModel {
        CatalogRecordModel {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            functional_unit: Some("kg".to_string()),
            energy: Some(10.0),
            water: Some(20.0),
            ghg: Some(1.0),
            doi: Some(format!("10.26188/{id}")),
            density: Some(1800.0),
            wastage: Some(1.1),
            service_life: Some(-1.0),
            hybrid_process_proportion_energy: Some(0.4),
            hybrid_process_proportion_water: Some(0.2),
            hybrid_process_proportion_ghg: Some(0.5),
        }
    }

    pub fn create_test_records() -> Vec<CatalogRecordModel> {
        let brick = create_test_record("1001", "Brick", "6: Sand, stone and ceramics");
        let mut carpet = create_test_record("2001", "Carpet", "4: Miscellaneous");
        carpet.functional_unit = Some("m2".to_string());
        carpet.energy = Some(100.0);
        carpet.service_life = Some(10.0);
        let mut steel = create_test_record("3001", "Steel", "3: Metals");
        steel.hybrid_process_proportion_water = None;
        vec![brick, carpet, steel]
    }
}
