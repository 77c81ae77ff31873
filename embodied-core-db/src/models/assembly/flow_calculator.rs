use embodied_core_api::{ApiResult, Flow};
use std::sync::Arc;
use tracing::debug;

use super::assembly::AssemblyModel;
use super::assembly_input::MaterialQuantity;
use crate::models::flows::{AssemblyFlows, FlowTotals, FlowValues, MaterialFlows};
use crate::models::replacement::num_replacements;

impl AssemblyModel {
    /// Embodied flow of `materials` within this assembly.
    ///
    /// # Arguments
    /// * `materials` - The materials to include, usually all of them or a single one
    /// * `flow` - The flow to compute
    /// * `wastage_only` - Count only the wasted share of material
    /// * `period` - `None` for initial flows, `Some(0)` for no recurrent flows,
    ///   `Some(years)` for recurrent flows over that period
    /// * `quantity` - Assembly quantity, defaults to `total_units`
    pub fn calculate_flow(
        &self,
        materials: &[MaterialQuantity],
        flow: Flow,
        wastage_only: bool,
        period: Option<u32>,
        quantity: Option<f64>,
    ) -> f64 {
        let base = if wastage_only { 0.0 } else { 1.0 };
        let quantity = quantity.unwrap_or(self.total_units());

        let contribution = |part: &MaterialQuantity| {
            let wastage = self.wastage_override().unwrap_or(part.material.wastage);
            quantity * part.quantity * part.material.coefficient(flow) * (base + wastage)
        };

        match period {
            None => materials.iter().map(contribution).sum(),
            Some(0) => 0.0,
            Some(period) => match self.service_life() {
                Some(service_life) => {
                    let replacements = num_replacements(period, Some(service_life)) as f64;
                    materials.iter().map(contribution).sum::<f64>() * replacements
                }
                None => materials
                    .iter()
                    .map(|part| contribution(part) * num_replacements(period, part.material.service_life) as f64)
                    .sum(),
            },
        }
    }

    /// Computes the four independent buckets once per flow and derives the life cycle buckets.
    ///
    /// Recurrent buckets use a period of 0 when no period of analysis is given.
    pub fn fill_flow_buckets(&self, period: Option<u32>, materials: &[MaterialQuantity], quantity: Option<f64>) -> FlowTotals {
        let recurrent_period = Some(period.unwrap_or(0));
        let bucket = |wastage_only: bool, period: Option<u32>| {
            FlowValues::from_fn(|flow| self.calculate_flow(materials, flow, wastage_only, period, quantity))
        };
        FlowTotals::from_parts(
            bucket(false, None),
            bucket(true, None),
            bucket(false, recurrent_period),
            bucket(true, recurrent_period),
        )
    }

    /// Flows of the whole assembly and of each distinct material name.
    ///
    /// # Returns
    /// * `Err(ApiError::IntegrityError)` - Two materials share a name but not a catalog entry
    pub fn calculate_flows(&self, period: Option<u32>) -> ApiResult<AssemblyFlows> {
        let mut flows = AssemblyFlows {
            totals: self.fill_flow_buckets(period, self.materials(), None),
            ..Default::default()
        };
        for part in self.materials() {
            let totals = self.fill_flow_buckets(period, std::slice::from_ref(part), None);
            let material_flows = MaterialFlows::new(totals, part.quantity, Arc::clone(&part.material));
            flows.add_material(part.material.name.as_str(), &material_flows)?;
        }
        Ok(flows)
    }

    /// Overwrites `recalculated_flows` for a new period of analysis
    pub(crate) fn recalculate_flows(&mut self, period: Option<u32>) -> ApiResult<()> {
        debug!(name = %self.name(), ?period, "Recalculating assembly flows");
        self.recalculated_flows = self.calculate_flows(period)?;
        Ok(())
    }

    /// Flow totals of each part of the assembly
    pub fn part_flows(&self, period: Option<u32>) -> Vec<FlowTotals> {
        self.individual_units()
            .iter()
            .map(|units| self.fill_flow_buckets(period, self.materials(), Some(*units)))
            .collect()
    }
}
