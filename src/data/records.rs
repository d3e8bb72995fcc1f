use crate::roi::InvestmentInput;
use serde::{Deserialize, Serialize};

//one row of funding_rounds_overview.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRoundRecord {
    #[serde(rename = "Round")]
    pub round: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Pre_Money_Valuation")]
    pub pre_money_valuation: f64,
    #[serde(rename = "Post_Money_Valuation")]
    pub post_money_valuation: f64,
    #[serde(rename = "Amount_Raised")]
    pub amount_raised: f64,
}

impl FundingRoundRecord {
    //input for a cheque of `investment` into this round
    pub fn investment_input(
        &self,
        investment: f64,
        exit_year: i32,
        exit_valuation: f64,
    ) -> InvestmentInput {
        InvestmentInput::for_round(
            investment,
            &self.round,
            self.year,
            self.post_money_valuation,
            exit_year,
            exit_valuation,
        )
    }

    //round name with underscores shown as spaces
    pub fn display_name(&self) -> String {
        self.round.replace('_', " ")
    }
}

//one row of investor_roi_summary.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiSummaryRecord {
    #[serde(rename = "Round")]
    pub round: String,
    #[serde(rename = "Investment_Year")]
    pub investment_year: i32,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Investment_Amount")]
    pub investment_amount: f64,
    #[serde(rename = "Entry_Valuation")]
    pub entry_valuation: f64,
    #[serde(rename = "Initial_Ownership_%")]
    pub initial_ownership_pct: f64,
    #[serde(rename = "Final_Ownership_%_at_IPO")]
    pub final_ownership_pct: f64,
    #[serde(rename = "Exit_Value_at_IPO")]
    pub exit_value: f64,
    #[serde(rename = "Absolute_Return")]
    pub absolute_return: f64,
    #[serde(rename = "MOIC")]
    pub moic: f64,
    #[serde(rename = "IRR_%")]
    pub irr_pct: f64,
    #[serde(rename = "Holding_Period_Years")]
    pub holding_period_years: f64,
}
