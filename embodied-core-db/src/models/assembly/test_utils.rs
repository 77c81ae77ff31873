#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;

    use crate::models::assembly::{AssemblyModel, MaterialQuantity, NewAssembly};
    use crate::models::material::MaterialModel;

    pub fn brick_wall_input(materials: Vec<(Arc<MaterialModel>, f64)>) -> NewAssembly {
        NewAssembly {
            name: Some("Brick wall".to_string()),
            category: Some("Exterior walls".to_string()),
            comments: String::new(),
            assembly_units: "no.".to_string(),
            service_life: None,
            wastage_percent: None,
            materials: materials
                .into_iter()
                .map(|(material, quantity)| MaterialQuantity::new(material, quantity))
                .collect(),
        }
    }

    /// Counted assembly made of one part of `total_units` units
    pub fn create_test_assembly(
        name: &str,
        category: &str,
        materials: Vec<(Arc<MaterialModel>, f64)>,
        total_units: f64,
    ) -> AssemblyModel {
        let mut input = brick_wall_input(materials);
        input.name = Some(name.to_string());
        input.category = Some(category.to_string());
        AssemblyModel::new(input, vec![total_units]).unwrap()
    }
}
