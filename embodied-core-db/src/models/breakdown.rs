use embodied_core_api::{ApiError, ApiResult, Flow};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;

use crate::models::analysis::AnalysisModel;
use crate::models::assembly::AssemblyModel;
use crate::models::flows::MaterialFlows;
use crate::models::material::MaterialModel;

/// Process-based and input-output-based shares of a hybrid value; they sum to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HybridShare {
    pub process: f64,
    pub io: f64,
}

impl HybridShare {
    pub fn from_process_share(process: f64) -> Self {
        Self {
            process,
            io: 1.0 - process,
        }
    }
}

/// Hybrid shares per flow. `None` where a share is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FlowBreakdown {
    pub energy: Option<HybridShare>,
    pub water: Option<HybridShare>,
    pub ghg: Option<HybridShare>,
}

impl FlowBreakdown {
    pub fn from_fn(mut f: impl FnMut(Flow) -> Option<HybridShare>) -> Self {
        Self {
            energy: f(Flow::Energy),
            water: f(Flow::Water),
            ghg: f(Flow::Ghg),
        }
    }

    pub fn get(&self, flow: Flow) -> Option<HybridShare> {
        match flow {
            Flow::Energy => self.energy,
            Flow::Water => self.water,
            Flow::Ghg => self.ghg,
        }
    }
}

/// Entities whose embodied flows can be split into process and input-output shares.
///
/// Composite entities weight each material's process share by its life cycle flow.
/// A flow with no life cycle total, or with a contributing material of unknown share,
/// has no breakdown.
pub trait HybridBreakdown {
    fn breakdown(&self) -> FlowBreakdown;
}

impl HybridBreakdown for MaterialModel {
    fn breakdown(&self) -> FlowBreakdown {
        FlowBreakdown::from_fn(|flow| self.process_shares.get(flow).map(HybridShare::from_process_share))
    }
}

impl HybridBreakdown for AssemblyModel {
    fn breakdown(&self) -> FlowBreakdown {
        weighted_breakdown(self.recalculated_flows().by_material.values())
    }
}

impl HybridBreakdown for AnalysisModel {
    fn breakdown(&self) -> FlowBreakdown {
        weighted_breakdown(self.flows().by_material.values().map(|summary| &summary.flows))
    }
}

fn weighted_breakdown<'a>(materials: impl Iterator<Item = &'a MaterialFlows> + Clone) -> FlowBreakdown {
    FlowBreakdown::from_fn(|flow| {
        let mut total = 0.0;
        let mut process = 0.0;
        for entry in materials.clone() {
            let weight = entry.totals.life_cycle[flow];
            if weight == 0.0 {
                continue;
            }
            let share = entry.material.process_shares.get(flow)?;
            total += weight;
            process += weight * share;
        }
        (total > 0.0).then(|| HybridShare::from_process_share(process / total))
    })
}

/// Breaks down a type-erased entity.
///
/// # Returns
/// * `Err(ApiError::UnsupportedEntity)` - The entity is not a material, assembly, built asset or analysis
pub fn breakdown_entity(entity: &dyn Any) -> ApiResult<FlowBreakdown> {
    if let Some(material) = entity.downcast_ref::<MaterialModel>() {
        Ok(material.breakdown())
    } else if let Some(material) = entity.downcast_ref::<Arc<MaterialModel>>() {
        Ok(material.breakdown())
    } else if let Some(assembly) = entity.downcast_ref::<AssemblyModel>() {
        Ok(assembly.breakdown())
    } else if let Some(analysis) = entity.downcast_ref::<AnalysisModel>() {
        Ok(analysis.breakdown())
    } else {
        Err(ApiError::UnsupportedEntity(
            "You can only break down the embodied flows of a material, assembly, built asset or analysis".to_string(),
        ))
    }
}
