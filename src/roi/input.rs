use crate::roi::calculator::{calculate_roi, RoiResult};
use crate::roi::dilution::dilution_factor_for;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//non-fatal input diagnostics, the calculator still produces a result
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputWarning {
    #[error("Investment amount is not positive: {0}")]
    NonPositiveInvestment(f64),
    #[error("Initial ownership {0:.4}% is outside (0, 100]")]
    OwnershipOutOfRange(f64),
    #[error("Dilution factor {0} is outside (0, 1]")]
    DilutionOutOfRange(f64),
    #[error("Holding period is negative: {0} years")]
    NegativeHoldingPeriod(f64),
}

//a single investment from entry to exit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    //capital committed
    pub investment_amount: f64,

    //post-money valuation at entry
    pub entry_valuation: f64,

    //valuation assumed at the exit event
    pub exit_valuation: f64,

    //ownership % right after the round closes
    pub initial_ownership_pct: f64,

    //share of initial ownership left at exit
    pub dilution_factor: f64,

    //exit year minus entry year
    pub years_held: f64,
}

impl InvestmentInput {
    //builds the input for a cheque written into a known round
    pub fn for_round(
        investment_amount: f64,
        round_name: &str,
        round_year: i32,
        round_post_money_val: f64,
        exit_year: i32,
        exit_valuation: f64,
    ) -> Self {
        let initial_ownership_pct = if round_post_money_val != 0.0 {
            investment_amount / round_post_money_val * 100.0
        } else {
            0.0
        };

        InvestmentInput {
            investment_amount,
            entry_valuation: round_post_money_val,
            exit_valuation,
            initial_ownership_pct,
            dilution_factor: dilution_factor_for(round_name),
            years_held: f64::from(exit_year - round_year),
        }
    }

    //builds the input from explicit entry and exit ownership percentages.
    //with no entry ownership there is nothing to dilute, so the factor is 1.0
    pub fn from_ownership(
        investment_amount: f64,
        entry_valuation: f64,
        exit_valuation: f64,
        initial_ownership_pct: f64,
        final_ownership_pct: f64,
        years_held: f64,
    ) -> Self {
        let dilution_factor = if initial_ownership_pct != 0.0 {
            final_ownership_pct / initial_ownership_pct
        } else {
            1.0
        };

        InvestmentInput {
            investment_amount,
            entry_valuation,
            exit_valuation,
            initial_ownership_pct,
            dilution_factor,
            years_held,
        }
    }

    pub fn final_ownership_pct(&self) -> f64 {
        self.initial_ownership_pct * self.dilution_factor
    }

    pub fn calculate(&self) -> RoiResult {
        calculate_roi(
            self.investment_amount,
            self.entry_valuation,
            self.exit_valuation,
            self.initial_ownership_pct,
            self.final_ownership_pct(),
            self.years_held,
        )
    }

    //inputs a curated dataset would never contain
    pub fn warnings(&self) -> Vec<InputWarning> {
        let mut warnings = Vec::new();

        if self.investment_amount <= 0.0 {
            warnings.push(InputWarning::NonPositiveInvestment(self.investment_amount));
        }
        if self.initial_ownership_pct <= 0.0 || self.initial_ownership_pct > 100.0 {
            warnings.push(InputWarning::OwnershipOutOfRange(self.initial_ownership_pct));
        }
        //dilution only means something for a positive stake
        if self.initial_ownership_pct > 0.0
            && (self.dilution_factor <= 0.0 || self.dilution_factor > 1.0)
        {
            warnings.push(InputWarning::DilutionOutOfRange(self.dilution_factor));
        }
        if self.years_held < 0.0 {
            warnings.push(InputWarning::NegativeHoldingPeriod(self.years_held));
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_ownership_and_holding_period() {
        let input =
            InvestmentInput::for_round(8_000_000.0, "Series_B", 2026, 33_000_000.0, 2030, 240e6);

        assert!((input.initial_ownership_pct - 24.242424242424242).abs() < 1e-9);
        assert!((input.final_ownership_pct() - 16.161616161616163).abs() < 1e-9);
        assert_eq!(input.years_held, 4.0);
        assert_eq!(input.entry_valuation, 33_000_000.0);
        assert!(input.warnings().is_empty());
    }

    #[test]
    fn zero_post_money_does_not_divide() {
        let input = InvestmentInput::for_round(1_000.0, "Seed", 2015, 0.0, 2030, 240e6);
        assert_eq!(input.initial_ownership_pct, 0.0);
        assert_eq!(
            input.warnings(),
            vec![InputWarning::OwnershipOutOfRange(0.0)]
        );
    }

    #[test]
    fn explicit_ownership_keeps_final_stake() {
        let input = InvestmentInput::from_ownership(8e6, 33e6, 240e6, 24.24, 16.16, 4.0);

        assert!((input.dilution_factor - 16.16 / 24.24).abs() < 1e-12);
        assert!((input.final_ownership_pct() - 16.16).abs() < 1e-9);
        assert!(input.warnings().is_empty());
    }

    #[test]
    fn zero_entry_ownership_warns_once() {
        let input = InvestmentInput::from_ownership(1e6, 10e6, 100e6, 0.0, 0.0, 4.0);

        assert_eq!(input.dilution_factor, 1.0);
        assert_eq!(
            input.warnings(),
            vec![InputWarning::OwnershipOutOfRange(0.0)]
        );
    }

    #[test]
    fn growing_stake_flags_dilution() {
        let input = InvestmentInput::from_ownership(1e6, 10e6, 100e6, 10.0, 12.0, 4.0);
        assert_eq!(input.warnings(), vec![InputWarning::DilutionOutOfRange(1.2)]);
    }

    #[test]
    fn flags_oversized_cheque_and_backwards_exit() {
        let input = InvestmentInput::for_round(50e6, "Bridge", 2030, 33e6, 2026, 240e6);
        let warnings = input.warnings();

        assert!(warnings.contains(&InputWarning::OwnershipOutOfRange(input.initial_ownership_pct)));
        assert!(warnings.contains(&InputWarning::NegativeHoldingPeriod(-4.0)));
    }
}
