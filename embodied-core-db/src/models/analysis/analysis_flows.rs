use embodied_core_api::ApiResult;
use indexmap::IndexMap;

use crate::models::assembly::AssemblyModel;
use crate::models::flows::{AssemblyFlows, FlowTotals, MaterialFlows};

/// Flows of one material name across an analysis, with the share of each assembly.
#[derive(Debug, Clone)]
pub struct MaterialSummary {
    pub flows: MaterialFlows,
    /// Keyed by assembly name
    pub by_assembly: IndexMap<String, MaterialFlows>,
}

/// Aggregated flows of an analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalysisFlows {
    pub totals: FlowTotals,
    /// Keyed by material name
    pub by_material: IndexMap<String, MaterialSummary>,
    /// Keyed by assembly category, each with its own `by_material`
    pub by_assembly: IndexMap<String, AssemblyFlows>,
}

impl AnalysisFlows {
    /// Merges one assembly's flows into the totals, the material cross-tab and its category.
    pub fn absorb_assembly(&mut self, assembly_name: &str, category: &str, flows: &AssemblyFlows) -> ApiResult<()> {
        self.totals.merge(&flows.totals);

        for (material_name, material_flows) in &flows.by_material {
            match self.by_material.get_mut(material_name) {
                Some(summary) => {
                    summary.flows.merge(material_flows)?;
                    match summary.by_assembly.get_mut(assembly_name) {
                        Some(existing) => existing.merge(material_flows)?,
                        None => {
                            summary
                                .by_assembly
                                .insert(assembly_name.to_string(), material_flows.clone());
                        }
                    }
                }
                None => {
                    let mut by_assembly = IndexMap::new();
                    by_assembly.insert(assembly_name.to_string(), material_flows.clone());
                    self.by_material.insert(
                        material_name.clone(),
                        MaterialSummary {
                            flows: material_flows.clone(),
                            by_assembly,
                        },
                    );
                }
            }
        }

        self.by_assembly
            .entry(category.to_string())
            .or_default()
            .merge(flows, true)
    }

    /// Material names across every category, in first-seen order
    pub fn category_material_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for category in self.by_assembly.values() {
            for name in category.by_material.keys() {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }
}

/// Sums the recalculated flows of `assemblies` by assembly category and by material.
pub fn sum_by_assembly_and_material<'a, I>(assemblies: I) -> ApiResult<AnalysisFlows>
where
    I: IntoIterator<Item = &'a AssemblyModel>,
{
    let mut flows = AnalysisFlows::default();
    for assembly in assemblies {
        flows.absorb_assembly(assembly.name(), assembly.category(), assembly.recalculated_flows())?;
    }
    Ok(flows)
}
