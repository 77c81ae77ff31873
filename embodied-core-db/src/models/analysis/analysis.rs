use embodied_core_api::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use super::analysis_flows::{sum_by_assembly_and_material, AnalysisFlows};
use crate::models::assembly::AssemblyModel;
use crate::models::identifiable::Identifiable;
use crate::models::material::MaterialModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Analysis,
    /// An analysis whose own flows never include recurrent flows
    BuiltAsset,
}

/// A direct member of an analysis.
#[derive(Debug, Clone)]
pub enum AnalysisMember {
    Assembly(AssemblyModel),
    /// A built asset or a nested analysis
    Group(AnalysisModel),
}

impl From<AssemblyModel> for AnalysisMember {
    fn from(assembly: AssemblyModel) -> Self {
        AnalysisMember::Assembly(assembly)
    }
}

impl From<AnalysisModel> for AnalysisMember {
    fn from(analysis: AnalysisModel) -> Self {
        AnalysisMember::Group(analysis)
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct NewAnalysis {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub comments: String,
    pub period_of_analysis: Option<u32>,
}

impl NewAnalysis {
    pub fn named(name: &str, period_of_analysis: Option<u32>) -> Self {
        Self {
            name: name.to_string(),
            comments: String::new(),
            period_of_analysis,
        }
    }
}

/// # Documentation
/// - A named collection of assemblies, possibly grouped into built assets
/// - Building or re-periodising an analysis overwrites `recalculated_flows` of every
///   assembly it contains, nested ones included; nested groups keep their own `flows`
#[derive(Debug, Clone)]
pub struct AnalysisModel {
    id: Uuid,
    name: String,
    kind: AnalysisKind,
    comments: String,
    period_of_analysis: Option<u32>,
    members: Vec<AnalysisMember>,
    flows: AnalysisFlows,
}

impl AnalysisModel {
    /// Builds an analysis and aggregates its assemblies at `period_of_analysis`.
    pub fn new(input: NewAnalysis, members: Vec<AnalysisMember>) -> ApiResult<Self> {
        Self::build(input, AnalysisKind::Analysis, members)
    }

    /// Builds a built asset. Its period of analysis is always 0.
    pub fn built_asset(mut input: NewAnalysis, members: Vec<AnalysisMember>) -> ApiResult<Self> {
        input.period_of_analysis = Some(0);
        Self::build(input, AnalysisKind::BuiltAsset, members)
    }

    fn build(input: NewAnalysis, kind: AnalysisKind, members: Vec<AnalysisMember>) -> ApiResult<Self> {
        input.validate()?;
        let mut analysis = AnalysisModel {
            id: Uuid::new_v4(),
            name: input.name,
            kind,
            comments: input.comments,
            period_of_analysis: input.period_of_analysis,
            members,
            flows: AnalysisFlows::default(),
        };
        analysis.recalculate()?;
        info!(
            name = %analysis.name,
            kind = ?analysis.kind,
            period = ?analysis.period_of_analysis,
            assemblies = analysis.assemblies().count(),
            "Analysis aggregated"
        );
        Ok(analysis)
    }

    /// Applies a new period of analysis to every contained assembly and re-aggregates.
    ///
    /// # Returns
    /// * `Err(ApiError::ValidationError)` - This is a built asset, whose period is fixed at 0
    pub fn set_period_of_analysis(&mut self, period: Option<u32>) -> ApiResult<()> {
        if self.kind == AnalysisKind::BuiltAsset {
            return Err(ApiError::ValidationError(format!(
                "The period of analysis of built asset '{}' is fixed at 0",
                self.name
            )));
        }
        self.period_of_analysis = period;
        self.recalculate()
    }

    fn recalculate(&mut self) -> ApiResult<()> {
        let period = self.period_of_analysis;
        for assembly in self.assemblies_mut() {
            assembly.recalculate_flows(period)?;
        }
        self.flows = sum_by_assembly_and_material(self.assemblies())?;
        debug!(name = %self.name, ?period, "Analysis flows recalculated");
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AnalysisKind {
        self.kind
    }

    pub fn is_built_asset(&self) -> bool {
        self.kind == AnalysisKind::BuiltAsset
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn period_of_analysis(&self) -> Option<u32> {
        self.period_of_analysis
    }

    pub fn members(&self) -> &[AnalysisMember] {
        &self.members
    }

    pub fn flows(&self) -> &AnalysisFlows {
        &self.flows
    }

    /// Every assembly in the analysis, nested groups included, depth first
    pub fn assemblies(&self) -> Box<dyn Iterator<Item = &AssemblyModel> + '_> {
        Box::new(self.members.iter().flat_map(|member| match member {
            AnalysisMember::Assembly(assembly) => Box::new(std::iter::once(assembly))
                as Box<dyn Iterator<Item = &AssemblyModel> + '_>,
            AnalysisMember::Group(group) => group.assemblies(),
        }))
    }

    fn assemblies_mut(&mut self) -> Vec<&mut AssemblyModel> {
        let mut assemblies = Vec::new();
        for member in self.members.iter_mut() {
            match member {
                AnalysisMember::Assembly(assembly) => assemblies.push(assembly),
                AnalysisMember::Group(group) => assemblies.extend(group.assemblies_mut()),
            }
        }
        assemblies
    }

    /// Built assets anywhere in the analysis, depth first
    pub fn built_assets(&self) -> Vec<&AnalysisModel> {
        let mut built_assets = Vec::new();
        for member in &self.members {
            if let AnalysisMember::Group(group) = member {
                if group.is_built_asset() {
                    built_assets.push(group);
                } else {
                    built_assets.extend(group.built_assets());
                }
            }
        }
        built_assets
    }

    /// Assemblies that are not part of a built asset
    pub fn loose_assemblies(&self) -> Vec<&AssemblyModel> {
        let mut assemblies = Vec::new();
        for member in &self.members {
            match member {
                AnalysisMember::Assembly(assembly) => assemblies.push(assembly),
                AnalysisMember::Group(group) if !group.is_built_asset() => {
                    assemblies.extend(group.loose_assemblies())
                }
                AnalysisMember::Group(_) => {}
            }
        }
        assemblies
    }

    /// Every material with its total quantity (`quantity * total_units`) per assembly
    pub fn material_quantities(&self) -> Vec<(Arc<MaterialModel>, f64)> {
        self.assemblies()
            .flat_map(|assembly| {
                assembly
                    .materials()
                    .iter()
                    .map(move |part| (Arc::clone(&part.material), part.quantity * assembly.total_units()))
            })
            .collect()
    }
}

impl Identifiable for AnalysisModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
