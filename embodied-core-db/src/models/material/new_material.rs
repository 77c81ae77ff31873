use embodied_core_api::{ApiError, ApiResult, Flow};
use serde::Deserialize;
use validator::Validate;

use super::material::{MaterialKind, ProcessShares};
use crate::models::catalog::CatalogRecordModel;

pub const CUSTOM_MATERIAL_NAME: &str = "Custom Material";

/// Input for [`super::MaterialModel::new`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewMaterial {
    pub kind: MaterialKind,

    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub functional_unit: String,
    #[validate(length(max = 100))]
    pub category: String,
    #[validate(length(max = 50))]
    pub material_id: Option<String>,
    #[validate(length(max = 255))]
    pub doi: Option<String>,

    #[validate(range(min = 0.0))]
    pub energy: f64,
    #[validate(range(min = 0.0))]
    pub water: f64,
    #[validate(range(min = 0.0))]
    pub ghg: f64,
    #[validate(range(min = 0.0))]
    pub density: f64,

    /// Wastage in percent; `None` means no wastage
    #[validate(range(min = 0.0, exclusive_max = 100.0))]
    pub wastage_percent: Option<f64>,
    pub service_life: Option<u32>,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub process_shares: ProcessShares,
    #[serde(default)]
    pub reductions: CoefficientReductions,
}

/// Reduction percentage per flow, for modelling improved products
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct CoefficientReductions {
    pub energy: Option<f64>,
    pub water: Option<f64>,
    pub ghg: Option<f64>,
}

impl CoefficientReductions {
    /// `coefficient / 100 * |100 - reduction|`, or the coefficient unchanged without a reduction
    pub fn apply(&self, flow: Flow, coefficient: f64) -> f64 {
        let reduction = match flow {
            Flow::Energy => self.energy,
            Flow::Water => self.water,
            Flow::Ghg => self.ghg,
        };
        match reduction {
            Some(reduction) => coefficient / 100.0 * (100.0 - reduction).abs(),
            None => coefficient,
        }
    }
}

/// User choices applied on top of a catalog record.
///
/// An explicit `Some(0)` wastage or service life wins over the catalog default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialOverrides {
    pub wastage_percent: Option<f64>,
    pub service_life: Option<u32>,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub reductions: CoefficientReductions,
}

impl NewMaterial {
    /// Input for a custom material with the documented defaults
    pub fn custom(name: Option<&str>, functional_unit: &str, energy: f64, water: f64, ghg: f64) -> Self {
        NewMaterial {
            kind: MaterialKind::Custom,
            name: name
                .filter(|n| !n.is_empty())
                .unwrap_or(CUSTOM_MATERIAL_NAME)
                .to_string(),
            functional_unit: functional_unit.to_string(),
            energy,
            water,
            ghg,
            ..Default::default()
        }
    }

    /// Builds material input from a catalog record.
    ///
    /// # Returns
    /// * `Err(ApiError::ValidationError)` - The record lacks a functional unit or a coefficient
    pub fn from_catalog_record(record: &CatalogRecordModel, overrides: &MaterialOverrides) -> ApiResult<Self> {
        let required = |field: &str, value: Option<f64>| {
            value.filter(|v| !v.is_nan()).ok_or_else(|| {
                ApiError::ValidationError(format!(
                    "Missing required coefficient '{field}' for material '{}'",
                    record.name
                ))
            })
        };
        let functional_unit = record.functional_unit.clone().ok_or_else(|| {
            ApiError::ValidationError(format!("Missing functional unit for material '{}'", record.name))
        })?;

        Ok(NewMaterial {
            kind: MaterialKind::Catalog,
            name: record.name.clone(),
            functional_unit,
            category: record.category.clone(),
            material_id: Some(record.id.clone()),
            doi: record.doi.clone(),
            energy: required("Energy", record.energy)?,
            water: required("Water", record.water)?,
            ghg: required("GHG", record.ghg)?,
            density: record.density.filter(|d| d.is_finite()).unwrap_or(0.0),
            wastage_percent: overrides.wastage_percent.or_else(|| record.wastage_percent()),
            service_life: overrides.service_life.or_else(|| record.service_life_years()),
            comments: overrides.comments.clone(),
            process_shares: record.process_shares(),
            reductions: overrides.reductions,
        })
    }
}
