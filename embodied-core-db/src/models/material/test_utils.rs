#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;

    use crate::models::material::{MaterialModel, NewMaterial, ProcessShares};

    /// Catalog material: 10 MJ, 20 L and 1 kgCO₂e per kg, 10% wastage, never replaced
    pub fn create_test_material(name: &str, material_id: &str) -> MaterialModel {
        MaterialModel::new(NewMaterial {
            name: name.to_string(),
            functional_unit: "kg".to_string(),
            category: "6: Sand, stone and ceramics".to_string(),
            material_id: Some(material_id.to_string()),
            doi: Some(format!("http://doi.org/10.26188/{material_id}")),
            energy: 10.0,
            water: 20.0,
            ghg: 1.0,
            density: 1800.0,
            wastage_percent: Some(10.0),
            service_life: None,
            process_shares: ProcessShares {
                energy: Some(0.4),
                water: Some(0.2),
                ghg: Some(0.5),
            },
            ..Default::default()
        })
        .unwrap()
    }

    pub fn create_test_material_with_service_life(name: &str, material_id: &str, service_life: u32) -> MaterialModel {
        let mut material = create_test_material(name, material_id);
        material.service_life = Some(service_life);
        material
    }

    pub fn create_test_custom_material(name: &str) -> MaterialModel {
        MaterialModel::new(NewMaterial::custom(Some(name), "kg", 5.0, 5.0, 5.0)).unwrap()
    }

    pub fn shared(material: MaterialModel) -> Arc<MaterialModel> {
        Arc::new(material)
    }
}
