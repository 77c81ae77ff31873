use uuid::Uuid;

/// Trait for entities that can be uniquely identified by a UUID
///
/// Materials and assemblies get a fresh identifier on construction, distinct
/// from any catalog key they carry.
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Uuid;
}
