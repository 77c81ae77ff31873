use std::sync::Arc;

use crate::models::material::MaterialModel;

/// A material with its quantity per assembly unit. The quantity is stored as an absolute value.
#[derive(Debug, Clone)]
pub struct MaterialQuantity {
    pub material: Arc<MaterialModel>,
    pub quantity: f64,
}

impl MaterialQuantity {
    pub fn new(material: Arc<MaterialModel>, quantity: f64) -> Self {
        Self {
            material,
            quantity: quantity.abs(),
        }
    }
}

/// One slot of the alternating material/quantity input list of an assembly.
#[derive(Debug, Clone)]
pub enum AssemblyInput {
    Material(Arc<MaterialModel>),
    Quantity(f64),
    /// Anything else wired into a slot (text, empty, wrong type)
    Invalid,
}

impl From<Arc<MaterialModel>> for AssemblyInput {
    fn from(material: Arc<MaterialModel>) -> Self {
        AssemblyInput::Material(material)
    }
}

impl From<f64> for AssemblyInput {
    fn from(quantity: f64) -> Self {
        AssemblyInput::Quantity(quantity)
    }
}

/// Pairs an alternating `[material, quantity, material, quantity, ...]` list.
///
/// A pair is kept only when its first slot holds a material and its second slot a
/// non-zero quantity. A trailing material without a quantity slot is dropped.
pub fn pair_material_inputs(inputs: &[AssemblyInput]) -> Vec<MaterialQuantity> {
    inputs
        .chunks_exact(2)
        .filter_map(|pair| match (&pair[0], &pair[1]) {
            (AssemblyInput::Material(material), AssemblyInput::Quantity(quantity))
                if *quantity != 0.0 && quantity.is_finite() =>
            {
                Some(MaterialQuantity::new(Arc::clone(material), *quantity))
            }
            _ => None,
        })
        .collect()
}
