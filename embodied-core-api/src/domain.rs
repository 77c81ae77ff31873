use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ApiError, ApiResult};

pub const PLUGIN_VERSION: &str = "1.00";
pub const DATABASE_VERSION: &str = "AU2019";

pub const DISCLAIMER: &str = "The default service life and wastage coefficients are indicative only and can vary substantially.\n\
The authors disclaim any liability, in whole or in part, arising from information contained in this report.\n\
They do not take any responsibility for any action taken, decision-made, or result associated with use of this report.";

/// Material categories used by the catalog, in display order
pub const MATERIAL_CATEGORIES: [&str; 8] = [
    "0: Concrete and plaster products",
    "1: Glass",
    "2: Insulation",
    "3: Metals",
    "4: Miscellaneous",
    "5: Plastics",
    "6: Sand, stone and ceramics",
    "7: Timber products",
];

/// An embodied environmental flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Energy,
    Water,
    Ghg,
}

impl Flow {
    pub const ALL: [Flow; 3] = [Flow::Energy, Flow::Water, Flow::Ghg];

    pub fn code_name(&self) -> &'static str {
        match self {
            Flow::Energy => "energy",
            Flow::Water => "water",
            Flow::Ghg => "ghg",
        }
    }

    pub fn print_name(&self) -> &'static str {
        match self {
            Flow::Energy => "Energy",
            Flow::Water => "Water",
            Flow::Ghg => "Greenhouse Gas Emissions",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Flow::Energy => "MJ",
            Flow::Water => "L",
            Flow::Ghg => "kgCO₂e",
        }
    }

    /// Catalog field holding the process-based share of the hybrid coefficient
    pub fn process_share_field(&self) -> String {
        format!("hybrid_process_proportion_{}", self.code_name())
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code_name())
    }
}

/// The six buckets of a flow totals record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowBucket {
    Initial,
    InitialWastage,
    Recurrent,
    RecurrentWastage,
    LifeCycle,
    LifeCycleWastage,
}

impl FlowBucket {
    pub const ALL: [FlowBucket; 6] = [
        FlowBucket::Initial,
        FlowBucket::InitialWastage,
        FlowBucket::Recurrent,
        FlowBucket::RecurrentWastage,
        FlowBucket::LifeCycle,
        FlowBucket::LifeCycleWastage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FlowBucket::Initial => "initial",
            FlowBucket::InitialWastage => "initial_wastage",
            FlowBucket::Recurrent => "recurrent",
            FlowBucket::RecurrentWastage => "recurrent_wastage",
            FlowBucket::LifeCycle => "life_cycle",
            FlowBucket::LifeCycleWastage => "life_cycle_wastage",
        }
    }

    pub fn is_wastage(&self) -> bool {
        matches!(
            self,
            FlowBucket::InitialWastage | FlowBucket::RecurrentWastage | FlowBucket::LifeCycleWastage
        )
    }
}

/// What a geometric input is measured as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureKind {
    Length,
    Area,
    Volume,
}

/// The unit a material's coefficients (or an assembly's quantity) are expressed per.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionalUnit {
    /// `no.`
    Number,
    /// `m`
    Metre,
    /// `m²`
    SquareMetre,
    /// `m³`
    CubicMetre,
    /// `kg`
    Kilogram,
    Other(String),
}

impl FunctionalUnit {
    /// Parses and normalises a functional unit string.
    ///
    /// Input is lowercased, `m2`/`m3` become `m²`/`m³`. Unknown non-empty
    /// units are kept as [`FunctionalUnit::Other`].
    pub fn parse(value: &str) -> ApiResult<Self> {
        let normalised = value.trim().to_lowercase();
        match normalised.as_str() {
            "" => Err(ApiError::ValidationError(
                "The functional unit can only be \"m\", \"m²\", \"m³\", \"kg\" or \"no.\" \
                 (\"m2\" or \"m3\" are accepted and will be corrected)"
                    .to_string(),
            )),
            "no." => Ok(FunctionalUnit::Number),
            "m" => Ok(FunctionalUnit::Metre),
            "m²" | "m2" => Ok(FunctionalUnit::SquareMetre),
            "m³" | "m3" => Ok(FunctionalUnit::CubicMetre),
            "kg" => Ok(FunctionalUnit::Kilogram),
            _ => Ok(FunctionalUnit::Other(normalised)),
        }
    }

    /// Parses a unit that an assembly can be measured in (`no.`, `m`, `m²`, `m³`).
    pub fn parse_assembly_unit(value: &str) -> ApiResult<Self> {
        let unit = Self::parse(value)?;
        if unit.is_assembly_unit() {
            Ok(unit)
        } else {
            Err(ApiError::ValidationError(format!(
                "No functional unit found for assembly: {value}"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FunctionalUnit::Number => "no.",
            FunctionalUnit::Metre => "m",
            FunctionalUnit::SquareMetre => "m²",
            FunctionalUnit::CubicMetre => "m³",
            FunctionalUnit::Kilogram => "kg",
            FunctionalUnit::Other(unit) => unit.as_str(),
        }
    }

    pub fn is_assembly_unit(&self) -> bool {
        matches!(
            self,
            FunctionalUnit::Number
                | FunctionalUnit::Metre
                | FunctionalUnit::SquareMetre
                | FunctionalUnit::CubicMetre
        )
    }

    /// `None` for counted units
    pub fn measure_kind(&self) -> Option<MeasureKind> {
        match self {
            FunctionalUnit::Metre => Some(MeasureKind::Length),
            FunctionalUnit::SquareMetre => Some(MeasureKind::Area),
            FunctionalUnit::CubicMetre => Some(MeasureKind::Volume),
            _ => None,
        }
    }
}

impl fmt::Display for FunctionalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn serialize_functional_unit<S>(unit: &FunctionalUnit, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(unit.as_str())
}

pub fn deserialize_functional_unit<'de, D>(deserializer: D) -> Result<FunctionalUnit, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    FunctionalUnit::parse(&s).map_err(|e| serde::de::Error::custom(format!("Unknown functional unit: {e}")))
}

/// How analysis results are broken down for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    #[default]
    Total,
    ByMaterial,
    ByAssembly,
    ByAssemblyAndMaterial,
}
