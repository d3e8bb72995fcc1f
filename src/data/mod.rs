pub mod loader;
pub mod records;

pub use loader::{
    load_funding_rounds, load_roi_summary, DataError, DataSet, RoundTable, FUNDING_ROUNDS_FILE,
    ROI_SUMMARY_FILE,
};
pub use records::{FundingRoundRecord, RoiSummaryRecord};
