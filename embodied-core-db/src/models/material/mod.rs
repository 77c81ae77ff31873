pub mod material;
pub mod new_material;

#[cfg(test)]
pub mod test_utils;

pub use material::*;
pub use new_material::*;
