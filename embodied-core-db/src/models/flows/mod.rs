pub mod flow_totals;
pub mod assembly_flows;

pub use flow_totals::*;
pub use assembly_flows::*;
