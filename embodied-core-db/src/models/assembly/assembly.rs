use embodied_core_api::{
    measure_geometry_units, ApiError, ApiResult, FunctionalUnit, GeometryInput, GeometryMeasurement,
};
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use super::assembly_input::MaterialQuantity;
use crate::models::flows::AssemblyFlows;
use crate::models::identifiable::Identifiable;
use crate::utils::require_finite;

pub const DEFAULT_ASSEMBLY_NAME: &str = "Assembly";

/// Input for [`AssemblyModel::new`] and [`AssemblyModel::from_geometry`].
#[derive(Debug, Clone, Default, Validate)]
pub struct NewAssembly {
    #[validate(length(max = 255))]
    pub name: Option<String>,
    /// Grouping used for comparisons; defaults to the assembly name
    #[validate(length(max = 255))]
    pub category: Option<String>,
    pub comments: String,
    /// `no.`, `m`, `m²` or `m³`
    pub assembly_units: String,
    /// Overrides the service life of every material when set
    pub service_life: Option<i64>,
    /// Overrides the wastage (in percent) of every material when set; `Some(0.0)` forces no wastage
    pub wastage_percent: Option<f64>,
    pub materials: Vec<MaterialQuantity>,
}

/// # Documentation
/// - A named group of materials with quantities per assembly unit
/// - `flows` is the as-built snapshot, computed once without a period of analysis
/// - `recalculated_flows` is the as-reported view, overwritten whenever an analysis
///   applies its period of analysis
#[derive(Debug, Clone)]
pub struct AssemblyModel {
    id: Uuid,
    name: String,
    category: String,
    comments: String,
    assembly_units: FunctionalUnit,
    service_life: Option<u32>,
    wastage_override: Option<f64>,
    individual_units: Vec<f64>,
    total_units: f64,
    materials: Vec<MaterialQuantity>,
    flows: AssemblyFlows,
    pub(crate) recalculated_flows: AssemblyFlows,
}

impl AssemblyModel {
    /// Builds an assembly from already measured part quantities.
    ///
    /// # Arguments
    /// * `input` - Assembly settings and materials
    /// * `individual_units` - Quantity of each part, in `assembly_units`
    pub fn new(input: NewAssembly, individual_units: Vec<f64>) -> ApiResult<Self> {
        let assembly_units = FunctionalUnit::parse_assembly_unit(&input.assembly_units)?;
        Self::build(input, assembly_units, individual_units)
    }

    /// Builds an assembly from host geometry, measured through `service`.
    ///
    /// # Returns
    /// * `Err(ApiError::GeometryError)` - A geometry does not match the assembly units
    pub fn from_geometry<G, S>(input: NewAssembly, geometry: &[GeometryInput<G>], service: &S) -> ApiResult<Self>
    where
        S: GeometryMeasurement<G> + ?Sized,
    {
        let assembly_units = FunctionalUnit::parse_assembly_unit(&input.assembly_units)?;
        let individual_units = measure_geometry_units(&assembly_units, geometry, service)?;
        Self::build(input, assembly_units, individual_units)
    }

    fn build(input: NewAssembly, assembly_units: FunctionalUnit, individual_units: Vec<f64>) -> ApiResult<Self> {
        input.validate()?;

        let wastage_override = match input.wastage_percent {
            Some(percent) => {
                let fraction = require_finite("wastage_percent", percent)?.abs() / 100.0;
                if fraction >= 1.0 {
                    return Err(ApiError::ValidationError(format!(
                        "Assembly wastage must be below 100%, got {percent}%"
                    )));
                }
                Some(fraction)
            }
            None => None,
        };

        let individual_units = individual_units
            .into_iter()
            .map(|units| require_finite("individual_units", units).map(f64::abs))
            .collect::<ApiResult<Vec<f64>>>()?;
        for part in &input.materials {
            require_finite("quantity", part.quantity)?;
        }

        let name = input
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_ASSEMBLY_NAME.to_string());
        let category = input
            .category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| name.clone());

        let mut assembly = AssemblyModel {
            id: Uuid::new_v4(),
            name,
            category,
            comments: input.comments,
            assembly_units,
            service_life: input
                .service_life
                .map(|years| years.unsigned_abs().min(u64::from(u32::MAX)) as u32)
                .filter(|years| *years > 0),
            wastage_override,
            total_units: individual_units.iter().sum(),
            individual_units,
            materials: input
                .materials
                .into_iter()
                .map(|part| MaterialQuantity::new(part.material, part.quantity))
                .collect(),
            flows: AssemblyFlows::default(),
            recalculated_flows: AssemblyFlows::default(),
        };

        let flows = assembly.calculate_flows(None)?;
        assembly.recalculated_flows = flows.clone();
        assembly.flows = flows;
        debug!(
            name = %assembly.name,
            total_units = assembly.total_units,
            materials = assembly.materials.len(),
            "Assembly created"
        );
        Ok(assembly)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// False when the category fell back to the assembly name
    pub fn has_category(&self) -> bool {
        self.category != self.name
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn assembly_units(&self) -> &FunctionalUnit {
        &self.assembly_units
    }

    pub fn service_life(&self) -> Option<u32> {
        self.service_life
    }

    pub fn wastage_override(&self) -> Option<f64> {
        self.wastage_override
    }

    pub fn individual_units(&self) -> &[f64] {
        &self.individual_units
    }

    pub fn total_units(&self) -> f64 {
        self.total_units
    }

    pub fn materials(&self) -> &[MaterialQuantity] {
        &self.materials
    }

    /// As-built flows, without recurrent flows
    pub fn flows(&self) -> &AssemblyFlows {
        &self.flows
    }

    /// Flows at the period of analysis last applied by an analysis
    pub fn recalculated_flows(&self) -> &AssemblyFlows {
        &self.recalculated_flows
    }
}

impl Identifiable for AssemblyModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
