pub mod export;
pub mod tables;

pub use export::{to_json, write_comparison_csv, write_sensitivity_csv};
pub use tables::{comparison_table, roi_table, sensitivity_table, summary_table};
