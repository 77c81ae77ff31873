use crate::domain::{FunctionalUnit, MeasureKind};
use crate::error::{ApiError, ApiResult};

/// Shape category reported by the geometry measurement service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeClass {
    Point,
    Curve,
    /// A closed, planar curve; measurable as a length or as the region it bounds
    ClosedPlanarCurve,
    Surface,
    Solid,
}

impl ShapeClass {
    /// Returns true if a geometry of this class can be measured as `kind`
    pub fn supports(&self, kind: MeasureKind) -> bool {
        match kind {
            MeasureKind::Length => matches!(self, ShapeClass::Curve | ShapeClass::ClosedPlanarCurve),
            MeasureKind::Area => matches!(self, ShapeClass::Surface | ShapeClass::ClosedPlanarCurve),
            MeasureKind::Volume => matches!(self, ShapeClass::Solid),
        }
    }
}

/// A single input slot of an assembly: nothing, a plain number, or a host geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryInput<G> {
    Null,
    Numeric(f64),
    Shape(G),
}

/// Geometry measurement collaborator supplied by the host environment.
///
/// # Type Parameters
/// * `G` - The host's geometry type
pub trait GeometryMeasurement<G>: Send + Sync {
    /// Classify the geometry
    fn shape_class(&self, geometry: &G) -> ShapeClass;

    /// Measure the geometry as a length, area or volume
    ///
    /// # Returns
    /// * `Ok(f64)` - The measured quantity
    /// * `Err` - If the geometry cannot be measured as `kind`
    fn measure(&self, geometry: &G, kind: MeasureKind) -> ApiResult<f64>;
}

/// Verifies geometry inputs against an assembly unit and returns the quantity of each part.
///
/// Null inputs are skipped. For `no.` every other input counts as one unit, or as its
/// value when numeric. For `m`, `m²` and `m³` each input must be a geometry whose shape
/// class supports the matching measurement.
pub fn measure_geometry_units<G, S>(
    unit: &FunctionalUnit,
    inputs: &[GeometryInput<G>],
    service: &S,
) -> ApiResult<Vec<f64>>
where
    S: GeometryMeasurement<G> + ?Sized,
{
    if !unit.is_assembly_unit() {
        return Err(ApiError::ValidationError(format!(
            "No functional unit found for assembly: {unit}"
        )));
    }

    let mut individual_units = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let quantity = match (unit.measure_kind(), input) {
            (_, GeometryInput::Null) => continue,
            (None, GeometryInput::Numeric(value)) => value.abs(),
            (None, GeometryInput::Shape(_)) => 1.0,
            (Some(kind), GeometryInput::Numeric(_)) => {
                return Err(ApiError::GeometryError(format!(
                    "input {index} is a number, expected geometry measurable as {kind:?} for {unit}"
                )));
            }
            (Some(kind), GeometryInput::Shape(geometry)) => {
                let shape = service.shape_class(geometry);
                if !shape.supports(kind) {
                    return Err(ApiError::GeometryError(format!(
                        "input {index} is a {shape:?}, which cannot be measured as {kind:?} for {unit}"
                    )));
                }
                service.measure(geometry, kind)?.abs()
            }
        };
        individual_units.push(quantity);
    }
    Ok(individual_units)
}
