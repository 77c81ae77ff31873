use embodied_core_api::{AnalysisType, Flow, FlowBucket};
use serde::Serialize;

use super::analysis::AnalysisModel;

pub const TOTAL_LABEL: &str = "total";

/// One labelled value of an analysis output table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputValue {
    pub label: String,
    pub value: f64,
}

impl OutputValue {
    fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl AnalysisModel {
    /// Tabulates one bucket of one flow, broken down by `analysis_type`.
    ///
    /// `ByAssemblyAndMaterial` lists, for each category, every material seen in any
    /// category, labelled `"<category>: <material>"`, with 0 where the category does
    /// not use the material.
    pub fn tabulate(&self, analysis_type: AnalysisType, bucket: FlowBucket, flow: Flow) -> Vec<OutputValue> {
        let flows = self.flows();
        match analysis_type {
            AnalysisType::Total => vec![OutputValue::new(TOTAL_LABEL, flows.totals.value(bucket, flow))],
            AnalysisType::ByMaterial => flows
                .by_material
                .iter()
                .map(|(name, summary)| OutputValue::new(name.as_str(), summary.flows.totals.value(bucket, flow)))
                .collect(),
            AnalysisType::ByAssembly => flows
                .by_assembly
                .iter()
                .map(|(category, assembly)| OutputValue::new(category.as_str(), assembly.totals.value(bucket, flow)))
                .collect(),
            AnalysisType::ByAssemblyAndMaterial => {
                let materials = flows.category_material_names();
                let mut values = Vec::with_capacity(materials.len() * flows.by_assembly.len());
                for (category, assembly) in &flows.by_assembly {
                    for material in &materials {
                        let value = assembly
                            .by_material
                            .get(*material)
                            .map(|m| m.totals.value(bucket, flow))
                            .unwrap_or(0.0);
                        values.push(OutputValue::new(format!("{category}: {material}"), value));
                    }
                }
                values
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::NewAnalysis;
    use crate::models::assembly::test_utils::test_utils::create_test_assembly;
    use crate::models::material::test_utils::test_utils::{create_test_material, shared};

    fn analysis() -> AnalysisModel {
        let wall = create_test_assembly("Wall", "Walls", vec![(shared(create_test_material("Brick", "1001")), 1.0)], 1.0);
        let roof = create_test_assembly("Roof", "Roofs", vec![(shared(create_test_material("Tile", "1005")), 2.0)], 1.0);
        AnalysisModel::new(NewAnalysis::named("Report", None), vec![wall.into(), roof.into()]).unwrap()
    }

    #[test]
    fn test_total_and_by_assembly() {
        let analysis = analysis();
        let total = analysis.tabulate(AnalysisType::Total, FlowBucket::Initial, Flow::Energy);
        assert_eq!(total.len(), 1);
        assert_eq!(total[0].label, TOTAL_LABEL);
        assert!((total[0].value - 33.0).abs() < 1e-9);

        let by_assembly = analysis.tabulate(AnalysisType::ByAssembly, FlowBucket::InitialWastage, Flow::Energy);
        let labels: Vec<&str> = by_assembly.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["Walls", "Roofs"]);
    }

    #[test]
    fn test_by_assembly_and_material_fills_gaps_with_zero() {
        let values = analysis().tabulate(AnalysisType::ByAssemblyAndMaterial, FlowBucket::Initial, Flow::Ghg);
        let labels: Vec<&str> = values.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["Walls: Brick", "Walls: Tile", "Roofs: Brick", "Roofs: Tile"]);
        assert_eq!(values[1].value, 0.0);
        assert_eq!(values[2].value, 0.0);
        assert!(values[3].value > 0.0);
    }
}
