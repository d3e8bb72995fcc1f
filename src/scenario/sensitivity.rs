use crate::data::FundingRoundRecord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SENSITIVITY_VALUATIONS: [f64; 5] = [
    160_000_000.0,
    200_000_000.0,
    240_000_000.0,
    280_000_000.0,
    320_000_000.0,
];

//returns for one exit valuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub exit_valuation: f64,
    pub exit_value: f64,
    pub moic: f64,
    pub irr: f64,
}

//sweeps the exit valuation for a fixed cheque into `round`
pub fn sensitivity(
    round: &FundingRoundRecord,
    investment: f64,
    exit_year: i32,
    valuations: &[f64],
) -> Vec<SensitivityPoint> {
    valuations
        .iter()
        .map(|&exit_valuation| {
            let result = round
                .investment_input(investment, exit_year, exit_valuation)
                .calculate();

            SensitivityPoint {
                exit_valuation,
                exit_value: result.exit_value,
                moic: result.moic,
                irr: result.irr,
            }
        })
        .collect()
}
