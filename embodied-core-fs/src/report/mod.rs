pub mod csv_report;
pub mod text_report;

pub use csv_report::{export_csv, render_csv};
pub use text_report::*;

#[cfg(test)]
pub mod test_utils;
