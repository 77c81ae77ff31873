pub mod assembly;
pub mod assembly_input;
pub mod flow_calculator;

#[cfg(test)]
pub mod test_utils;

pub use assembly::*;
pub use assembly_input::*;
