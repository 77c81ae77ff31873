/// Trait for records looked up by a stable text key, such as a catalog material name
pub trait Keyed {
    /// Returns the lookup key of the record
    fn get_key(&self) -> &str;
}
