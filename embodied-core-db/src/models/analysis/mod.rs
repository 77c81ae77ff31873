pub mod analysis;
pub mod analysis_flows;
pub mod process_inputs;
pub mod settings;
pub mod tabulate;

pub use analysis::*;
pub use analysis_flows::*;
pub use process_inputs::*;
pub use settings::*;
pub use tabulate::*;
