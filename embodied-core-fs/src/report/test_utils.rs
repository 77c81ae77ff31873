#[cfg(test)]
pub mod test_utils {
    use embodied_core_db::models::analysis::{process_inputs, AnalysisModel, AnalysisSettings, NewAnalysis};
    use embodied_core_db::models::assembly::{AssemblyModel, MaterialQuantity, NewAssembly};
    use embodied_core_db::models::material::{MaterialModel, NewMaterial, ProcessShares};
    use std::sync::Arc;

    /// Catalog material: 10 MJ, 20 L and 1 kgCO₂e per kg, 10% wastage
    pub fn material(name: &str, material_id: &str) -> Arc<MaterialModel> {
        Arc::new(
            MaterialModel::new(NewMaterial {
                name: name.to_string(),
                functional_unit: "kg".to_string(),
                category: "6: Sand, stone and ceramics".to_string(),
                material_id: Some(material_id.to_string()),
                doi: Some(format!("10.26188/{material_id}")),
                energy: 10.0,
                water: 20.0,
                ghg: 1.0,
                wastage_percent: Some(10.0),
                process_shares: ProcessShares {
                    energy: Some(0.4),
                    water: Some(0.2),
                    ghg: Some(0.5),
                },
                ..Default::default()
            })
            .unwrap(),
        )
    }

    pub fn carpet() -> Arc<MaterialModel> {
        let mut carpet = (*material("Carpet", "2001")).clone();
        carpet.service_life = Some(10);
        Arc::new(carpet)
    }

    /// An `m²` assembly in the "Walls" category
    pub fn wall(name: &str, materials: Vec<(Arc<MaterialModel>, f64)>, individual_units: Vec<f64>) -> AssemblyModel {
        AssemblyModel::new(
            NewAssembly {
                name: Some(name.to_string()),
                category: Some("Walls".to_string()),
                assembly_units: "m²".to_string(),
                materials: materials
                    .into_iter()
                    .map(|(material, quantity)| MaterialQuantity::new(material, quantity))
                    .collect(),
                ..Default::default()
            },
            individual_units,
        )
        .unwrap()
    }

    /// A built asset "House" with an uncategorised floor, plus a loose "Shed wall", over 50 years
    pub fn create_test_report() -> AnalysisModel {
        let floor = AssemblyModel::new(
            NewAssembly {
                name: Some("Floor".to_string()),
                assembly_units: "m2".to_string(),
                materials: vec![
                    MaterialQuantity::new(material("Brick, clay", "1001"), 3.0),
                    MaterialQuantity::new(carpet(), 1.0),
                ],
                ..Default::default()
            },
            vec![1.5, 0.5],
        )
        .unwrap();
        let house = AnalysisModel::built_asset(
            NewAnalysis {
                name: "House".to_string(),
                comments: "Two storey, timber frame".to_string(),
                period_of_analysis: None,
            },
            vec![floor.into()],
        )
        .unwrap();
        let shed = wall("Shed wall", vec![(material("Brick, clay", "1001"), 2.0)], vec![4.0]);

        let settings = AnalysisSettings {
            period_of_analysis: Some(50),
            ..Default::default()
        };
        process_inputs(vec![house.into(), shed.into()], &settings)
            .unwrap()
            .unwrap()
    }
}
