use crate::data::FundingRoundRecord;
use crate::roi::RoiResult;
use serde::{Deserialize, Serialize};

//the same cheque placed into one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundComparison {
    pub round: String,
    pub year: i32,
    //requested amount capped at what the round raised
    pub investment: f64,
    pub entry_valuation: f64,
    pub result: RoiResult,
}

//prices `investment` into each round at the given exit
pub fn compare_rounds<'a, I>(
    rounds: I,
    investment: f64,
    exit_year: i32,
    exit_valuation: f64,
) -> Vec<RoundComparison>
where
    I: IntoIterator<Item = &'a FundingRoundRecord>,
{
    rounds
        .into_iter()
        .map(|round| {
            let capped = investment.min(round.amount_raised);
            let result = round
                .investment_input(capped, exit_year, exit_valuation)
                .calculate();

            RoundComparison {
                round: round.display_name(),
                year: round.year,
                investment: capped,
                entry_valuation: round.post_money_valuation,
                result,
            }
        })
        .collect()
}

//highest moic, first one wins ties
pub fn best_by_moic(comparisons: &[RoundComparison]) -> Option<&RoundComparison> {
    comparisons.iter().fold(None, |best, c| match best {
        Some(b) if b.result.moic >= c.result.moic => Some(b),
        _ => Some(c),
    })
}

//(new - old) / old * 100, 0 when old is 0
pub fn percent_change(old: f64, new: f64) -> f64 {
    if old == 0.0 {
        0.0
    } else {
        (new - old) / old * 100.0
    }
}

//how one round stacks up against another on the headline figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundAdvantage {
    pub capital_change_pct: f64,
    pub entry_valuation_change_pct: f64,
    pub moic_ratio: f64,
    pub irr_spread: f64,
}

impl RoundAdvantage {
    //deltas of `ours` relative to `baseline`
    pub fn between(ours: &RoundComparison, baseline: &RoundComparison) -> Self {
        let moic_ratio = if baseline.result.moic != 0.0 {
            ours.result.moic / baseline.result.moic
        } else {
            0.0
        };

        RoundAdvantage {
            capital_change_pct: percent_change(baseline.investment, ours.investment),
            entry_valuation_change_pct: percent_change(
                baseline.entry_valuation,
                ours.entry_valuation,
            ),
            moic_ratio,
            irr_spread: ours.result.irr - baseline.result.irr,
        }
    }
}
