use embodied_core_api::{
    deserialize_functional_unit, serialize_functional_unit, ApiError, ApiResult, Flow,
    FunctionalUnit,
};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use super::new_material::NewMaterial;
use crate::models::identifiable::Identifiable;
use crate::utils::{get_heapless_string, get_optional_heapless_string, require_finite};

/// Separator between a material name and its functional unit in selection labels
pub const FUNCTIONAL_UNIT_SEP: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    #[default]
    Catalog,
    /// User-defined coefficients with no catalog entry, DOI or process shares
    Custom,
}

/// Process-based share of each hybrid coefficient, in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessShares {
    pub energy: Option<f64>,
    pub water: Option<f64>,
    pub ghg: Option<f64>,
}

impl ProcessShares {
    pub fn get(&self, flow: Flow) -> Option<f64> {
        match flow {
            Flow::Energy => self.energy,
            Flow::Water => self.water,
            Flow::Ghg => self.ghg,
        }
    }

    /// Rejects any share outside [0, 1], NaN included
    pub fn check_range(&self) -> ApiResult<()> {
        for flow in Flow::ALL {
            if let Some(share) = self.get(flow) {
                if !(0.0..=1.0).contains(&share) {
                    return Err(ApiError::ValidationError(format!(
                        "Process share for {flow:?} must be within [0, 1], got {share}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// # Documentation
/// - Per functional unit coefficients of one material, immutable once built
/// - `id` is fresh per instance; `material_id` is the catalog key used to tell
///   same-named materials apart
/// - `wastage` is a fraction in [0, 1)
/// - `service_life` of `None` means never replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialModel {
    pub id: Uuid,
    pub material_id: Option<HeaplessString<50>>,
    pub kind: MaterialKind,

    pub name: HeaplessString<255>,
    #[serde(
        serialize_with = "serialize_functional_unit",
        deserialize_with = "deserialize_functional_unit"
    )]
    pub functional_unit: FunctionalUnit,
    pub category: HeaplessString<100>,
    pub doi: Option<HeaplessString<255>>,

    pub energy: f64,
    pub water: f64,
    pub ghg: f64,
    pub density: f64,

    pub wastage: f64,
    pub service_life: Option<u32>,
    pub comments: String,
    pub process_shares: ProcessShares,
}

impl MaterialModel {
    /// Validates the input and builds a material with a fresh identifier.
    ///
    /// Coefficient reductions are applied here; wastage is converted from a
    /// percentage to a fraction.
    pub fn new(input: NewMaterial) -> ApiResult<Self> {
        input.validate()?;

        let functional_unit = FunctionalUnit::parse(&input.functional_unit)?;
        let reductions = input.reductions;
        let energy = reductions.apply(Flow::Energy, require_finite("energy", input.energy)?);
        let water = reductions.apply(Flow::Water, require_finite("water", input.water)?);
        let ghg = reductions.apply(Flow::Ghg, require_finite("ghg", input.ghg)?);

        let custom = input.kind == MaterialKind::Custom;
        let (material_id, doi, process_shares) = if custom {
            (None, None, ProcessShares::default())
        } else {
            input.process_shares.check_range()?;
            (
                get_optional_heapless_string("material_id", input.material_id.as_deref())?,
                get_optional_heapless_string("doi", input.doi.as_deref())?,
                input.process_shares,
            )
        };

        let material = MaterialModel {
            id: Uuid::new_v4(),
            material_id,
            kind: input.kind,
            name: get_heapless_string("name", &input.name)?,
            functional_unit,
            category: get_heapless_string("category", &input.category)?,
            doi,
            energy,
            water,
            ghg,
            density: require_finite("density", input.density)?,
            wastage: input.wastage_percent.map(|w| w / 100.0).unwrap_or(0.0),
            service_life: input.service_life.filter(|years| *years > 0),
            comments: input.comments,
            process_shares,
        };
        debug!(name = %material.name, kind = ?material.kind, "Material created");
        Ok(material)
    }

    pub fn coefficient(&self, flow: Flow) -> f64 {
        match flow {
            Flow::Energy => self.energy,
            Flow::Water => self.water,
            Flow::Ghg => self.ghg,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.kind == MaterialKind::Custom
    }

    /// True when both materials refer to the same catalog entry
    pub fn same_catalog_entry(&self, other: &MaterialModel) -> bool {
        self.kind == other.kind && self.material_id == other.material_id
    }

    /// `"<name> | (<functional unit>)"`, as shown in material pickers
    pub fn selection_label(name: &str, functional_unit: &str) -> String {
        format!("{name} {FUNCTIONAL_UNIT_SEP} ({functional_unit})")
    }

    /// Reverses [`MaterialModel::selection_label`]; labels without a separator are returned as is
    pub fn strip_selection_label(label: &str) -> &str {
        match label.find(FUNCTIONAL_UNIT_SEP) {
            Some(index) => label[..index].trim_end(),
            None => label,
        }
    }
}

impl PartialEq for MaterialModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Identifiable for MaterialModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
