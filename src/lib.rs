//investor return calculator for funding-round pitch data

pub mod config;
pub mod data;
pub mod format;
pub mod report;
pub mod roi;
pub mod scenario;

//prelude module for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfiguration;
    pub use crate::data::{
        load_funding_rounds, load_roi_summary, DataError, DataSet, FundingRoundRecord,
        RoiSummaryRecord,
    };
    pub use crate::format::{
        currency, format_currency, format_multiple, format_percentage, multiple, percentage,
    };
    pub use crate::report::{
        comparison_table, roi_table, sensitivity_table, summary_table, to_json,
        write_comparison_csv, write_sensitivity_csv,
    };
    pub use crate::roi::{
        calculate_custom_investment_roi, calculate_roi, dilution_factor_for,
        simple_annualized_return, years_between, FundingRound, InputWarning, InvestmentInput,
        RoiResult, DEFAULT_EXIT_VALUATION, DEFAULT_EXIT_YEAR,
    };
    pub use crate::scenario::{
        best_by_moic, compare_rounds, percent_change, sensitivity, ExitScenario, RoundAdvantage,
        RoundComparison, SensitivityPoint, DEFAULT_SENSITIVITY_VALUATIONS,
    };
}
