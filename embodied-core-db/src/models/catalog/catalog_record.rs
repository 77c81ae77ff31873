use embodied_core_api::{ApiError, ApiResult, Flow};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::keyed::Keyed;
use crate::models::material::ProcessShares;

/// # Documentation
/// - One material entry of the coefficient catalog, field names as published
/// - `Wastage` is stored as `1 + fraction` (1.0 = no wastage)
/// - `Service Life` of -1 (or absent) means the material is never replaced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecordModel {
    #[serde(rename = "ID", deserialize_with = "deserialize_catalog_id")]
    pub id: String,

    pub name: String,

    #[serde(rename = "Category", default)]
    pub category: String,

    #[serde(rename = "Functional Unit", default)]
    pub functional_unit: Option<String>,

    #[serde(rename = "Energy", default)]
    pub energy: Option<f64>,
    #[serde(rename = "Water", default)]
    pub water: Option<f64>,
    #[serde(rename = "GHG", default)]
    pub ghg: Option<f64>,

    #[serde(rename = "DOI", default)]
    pub doi: Option<String>,
    #[serde(rename = "Density", default)]
    pub density: Option<f64>,
    #[serde(rename = "Wastage", default)]
    pub wastage: Option<f64>,
    #[serde(rename = "Service Life", default)]
    pub service_life: Option<f64>,

    #[serde(default)]
    pub hybrid_process_proportion_energy: Option<f64>,
    #[serde(default)]
    pub hybrid_process_proportion_water: Option<f64>,
    #[serde(default)]
    pub hybrid_process_proportion_ghg: Option<f64>,
}

/// A single catalog attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

impl AttributeValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(value) => Some(*value),
            AttributeValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(value) => Some(value),
            AttributeValue::Number(_) => None,
        }
    }
}

impl CatalogRecordModel {
    /// Looks up one attribute by its catalog field name.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The attribute is present
    /// * `Ok(None)` - The attribute is known but has no value for this material
    /// * `Err(ApiError::NotFound)` - The attribute name is unknown
    pub fn attribute(&self, name: &str) -> ApiResult<Option<AttributeValue>> {
        let number = |value: Option<f64>| value.filter(|v| !v.is_nan()).map(AttributeValue::Number);
        let text = |value: &Option<String>| value.clone().map(AttributeValue::Text);

        let value = match name {
            "ID" => Some(AttributeValue::Text(self.id.clone())),
            "name" => Some(AttributeValue::Text(self.name.clone())),
            "Category" => Some(AttributeValue::Text(self.category.clone())),
            "Functional Unit" => text(&self.functional_unit),
            "Energy" => number(self.energy),
            "Water" => number(self.water),
            "GHG" => number(self.ghg),
            "DOI" => text(&self.doi),
            "Density" => number(self.density),
            "Wastage" => number(self.wastage),
            "Service Life" => number(self.service_life),
            "hybrid_process_proportion_energy" => number(self.hybrid_process_proportion_energy),
            "hybrid_process_proportion_water" => number(self.hybrid_process_proportion_water),
            "hybrid_process_proportion_ghg" => number(self.hybrid_process_proportion_ghg),
            _ => {
                return Err(ApiError::NotFound(format!(
                    "Attribute '{name}' not found for material '{}'",
                    self.name
                )))
            }
        };
        Ok(value)
    }

    /// Looks up several attributes at once; unknown or empty attributes become `None`
    pub fn attributes(&self, names: &[&str]) -> Vec<Option<AttributeValue>> {
        names
            .iter()
            .map(|name| self.attribute(name).ok().flatten())
            .collect()
    }

    /// Catalog wastage as a percentage: `(Wastage - 1) * 100`
    pub fn wastage_percent(&self) -> Option<f64> {
        self.wastage.filter(|w| w.is_finite()).map(|w| (w - 1.0) * 100.0)
    }

    /// Catalog service life in whole years, `None` when the material is never replaced
    pub fn service_life_years(&self) -> Option<u32> {
        self.service_life
            .filter(|years| years.is_finite() && *years >= 0.0)
            .map(|years| years.round() as u32)
    }

    pub fn process_share(&self, flow: Flow) -> Option<f64> {
        let share = match flow {
            Flow::Energy => self.hybrid_process_proportion_energy,
            Flow::Water => self.hybrid_process_proportion_water,
            Flow::Ghg => self.hybrid_process_proportion_ghg,
        };
        share.filter(|s| s.is_finite())
    }

    pub fn process_shares(&self) -> ProcessShares {
        ProcessShares {
            energy: self.process_share(Flow::Energy),
            water: self.process_share(Flow::Water),
            ghg: self.process_share(Flow::Ghg),
        }
    }
}

impl Keyed for CatalogRecordModel {
    fn get_key(&self) -> &str {
        &self.name
    }
}

/// Catalog identifiers are published either as text or as numbers
fn deserialize_catalog_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Integer(id) => id.to_string(),
        RawId::Float(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_json() -> &'static str {
        r#"{
            "ID": 1042,
            "name": "Brick",
            "Category": "6: Sand, stone and ceramics",
            "Functional Unit": "kg",
            "Energy": 10.5,
            "Water": 20.0,
            "GHG": 0.6,
            "DOI": "http://doi.org/10.26188/brick",
            "Density": 1800.0,
            "Wastage": 1.1,
            "Service Life": -1,
            "hybrid_process_proportion_energy": 0.4,
            "hybrid_process_proportion_water": 0.2,
            "hybrid_process_proportion_ghg": null
        }"#
    }

    #[test]
    fn test_deserialize_catalog_record() {
        let record: CatalogRecordModel = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(record.id, "1042");
        assert_eq!(record.get_key(), "Brick");
        assert_relative_eq!(record.wastage_percent().unwrap(), 10.0, epsilon = 1e-9);
        assert_eq!(record.service_life_years(), None);
        assert_eq!(record.process_shares().ghg, None);
        assert_eq!(record.process_shares().energy, Some(0.4));
    }

    #[test]
    fn test_attribute_lookup() {
        let record: CatalogRecordModel = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(record.attribute("Energy").unwrap(), Some(AttributeValue::Number(10.5)));
        assert_eq!(record.attribute("hybrid_process_proportion_ghg").unwrap(), None);
        assert!(matches!(record.attribute("Colour"), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_list_attribute_lookup_substitutes_none() {
        let record: CatalogRecordModel = serde_json::from_str(sample_json()).unwrap();
        let values = record.attributes(&["Functional Unit", "Colour", "Density"]);
        assert_eq!(
            values,
            vec![
                Some(AttributeValue::Text("kg".to_string())),
                None,
                Some(AttributeValue::Number(1800.0)),
            ]
        );
    }
}
