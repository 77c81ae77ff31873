pub mod analysis;
pub mod assembly;
pub mod breakdown;
pub mod catalog;
pub mod flows;
pub mod identifiable;
pub mod keyed;
pub mod material;
pub mod replacement;

// Re-exports
pub use analysis::*;
pub use assembly::*;
pub use breakdown::*;
pub use catalog::*;
pub use flows::*;
pub use identifiable::*;
pub use keyed::*;
pub use material::*;
pub use replacement::*;
