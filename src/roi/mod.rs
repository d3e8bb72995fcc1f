pub mod calculator;
pub mod dilution;
pub mod input;

pub use calculator::{
    calculate_custom_investment_roi, calculate_roi, simple_annualized_return, years_between,
    RoiResult, DEFAULT_EXIT_VALUATION, DEFAULT_EXIT_YEAR,
};
pub use dilution::{dilution_factor_for, normalize_round_name, FundingRound};
pub use input::{InputWarning, InvestmentInput};
