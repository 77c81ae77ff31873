use embodied_core_api::{ApiError, ApiResult};
use indexmap::IndexMap;
use std::sync::Arc;

use super::flow_totals::FlowTotals;
use crate::models::material::MaterialModel;

/// Separator written between two differing labels merged into one entry
pub const CONFLICT_SEPARATOR: &str = "/";

/// Merges a text label into an existing one.
///
/// Equal labels are left alone. A differing label is appended after
/// [`CONFLICT_SEPARATOR`] so that ambiguous merges stay visible in reports.
pub fn merge_label(existing: &mut String, incoming: &str) {
    if existing != incoming {
        existing.push_str(CONFLICT_SEPARATOR);
        existing.push_str(incoming);
    }
}

/// Flow totals of one material (or of same-named materials grouped together).
#[derive(Debug, Clone)]
pub struct MaterialFlows {
    pub totals: FlowTotals,
    /// Quantity of material per assembly unit
    pub quantity: f64,
    pub material_name: String,
    pub material: Arc<MaterialModel>,
}

impl MaterialFlows {
    pub fn new(totals: FlowTotals, quantity: f64, material: Arc<MaterialModel>) -> Self {
        Self {
            totals,
            quantity,
            material_name: material.name.to_string(),
            material,
        }
    }

    /// Merges another entry for the same display name into this one.
    ///
    /// # Returns
    /// * `Ok(())` - Totals and quantities were summed
    /// * `Err(ApiError::IntegrityError)` - The two materials are different catalog entries
    pub fn merge(&mut self, other: &MaterialFlows) -> ApiResult<()> {
        if !self.material.same_catalog_entry(&other.material) {
            return Err(ApiError::IntegrityError(format!(
                "Mismatched material name in 'by_material' calculation: '{}' refers to catalog entries {:?} and {:?}",
                other.material_name,
                self.material.material_id.as_deref(),
                other.material.material_id.as_deref(),
            )));
        }
        self.totals.merge(&other.totals);
        self.quantity += other.quantity;
        merge_label(&mut self.material_name, &other.material_name);
        self.material = Arc::clone(&other.material);
        Ok(())
    }
}

/// Flow totals of an assembly, in aggregate and by material name.
#[derive(Debug, Clone, Default)]
pub struct AssemblyFlows {
    pub totals: FlowTotals,
    pub by_material: IndexMap<String, MaterialFlows>,
}

impl AssemblyFlows {
    /// Adds a material entry, merging it into an existing entry of the same name
    pub fn add_material(&mut self, name: &str, flows: &MaterialFlows) -> ApiResult<()> {
        match self.by_material.get_mut(name) {
            Some(existing) => existing.merge(flows),
            None => {
                self.by_material.insert(name.to_string(), flows.clone());
                Ok(())
            }
        }
    }

    /// Merges another assembly's flows into this one.
    ///
    /// The `by_material` entries are only merged when `include_materials` is set.
    pub fn merge(&mut self, other: &AssemblyFlows, include_materials: bool) -> ApiResult<()> {
        self.totals.merge(&other.totals);
        if include_materials {
            for (name, flows) in &other.by_material {
                self.add_material(name, flows)?;
            }
        }
        Ok(())
    }
}
