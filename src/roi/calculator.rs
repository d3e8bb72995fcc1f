use crate::roi::input::InvestmentInput;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

//exit event assumed throughout the pitch
pub const DEFAULT_EXIT_YEAR: i32 = 2030;
pub const DEFAULT_EXIT_VALUATION: f64 = 240_000_000.0;

const DAYS_PER_YEAR: f64 = 365.25;

//return metrics for one investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub investment: f64,

    //value of the diluted stake at exit
    pub exit_value: f64,

    pub absolute_return: f64,

    //multiple on invested capital
    pub moic: f64,

    //simple annualized return in percent: lump sum in, lump sum out.
    //this is not a cash-flow irr solve, and 0 also means "not computable"
    pub irr: f64,

    pub years_held: f64,

    //final ownership %, echoed for display
    pub ownership_at_exit: f64,
}

//computes return metrics for a stake held from entry to exit.
//never fails: degenerate inputs produce zeroed moic/irr
pub fn calculate_roi(
    investment_amount: f64,
    _entry_valuation: f64,
    exit_valuation: f64,
    _initial_ownership_pct: f64,
    final_ownership_pct: f64,
    years_held: f64,
) -> RoiResult {
    let exit_value = exit_valuation * final_ownership_pct / 100.0;
    let absolute_return = exit_value - investment_amount;

    let moic = if investment_amount != 0.0 {
        exit_value / investment_amount
    } else {
        0.0
    };

    RoiResult {
        investment: investment_amount,
        exit_value,
        absolute_return,
        moic,
        irr: simple_annualized_return(moic, years_held),
        years_held,
        ownership_at_exit: final_ownership_pct,
    }
}

//roi for an arbitrary cheque in a named round, diluted per the round table
pub fn calculate_custom_investment_roi(
    investment_amount: f64,
    round_name: &str,
    round_year: i32,
    round_post_money_val: f64,
    exit_year: i32,
    exit_valuation: f64,
) -> RoiResult {
    InvestmentInput::for_round(
        investment_amount,
        round_name,
        round_year,
        round_post_money_val,
        exit_year,
        exit_valuation,
    )
    .calculate()
}

//(moic^(1/years) - 1) * 100, or 0 when years or moic is not positive
pub fn simple_annualized_return(moic: f64, years_held: f64) -> f64 {
    if years_held > 0.0 && moic > 0.0 {
        (moic.powf(1.0 / years_held) - 1.0) * 100.0
    } else {
        0.0
    }
}

//fractional years between two dates, negative if exit precedes entry
pub fn years_between(entry: NaiveDate, exit: NaiveDate) -> f64 {
    (exit - entry).num_days() as f64 / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn series_b_pitch_figures() {
        let result = calculate_custom_investment_roi(
            8_000_000.0,
            "Series B",
            2026,
            33_000_000.0,
            DEFAULT_EXIT_YEAR,
            DEFAULT_EXIT_VALUATION,
        );

        assert!((result.ownership_at_exit - 16.16).abs() < 0.01);
        assert!((result.exit_value - 38_787_878.79).abs() < 1.0);
        assert!((result.moic - 4.85).abs() < 0.005);
        assert!((result.irr - 48.4).abs() < 0.05);
        assert_eq!(result.years_held, 4.0);
    }

    #[test]
    fn series_c_pitch_figures() {
        let result = calculate_custom_investment_roi(
            20_000_000.0,
            "Series_C",
            2028,
            100_000_000.0,
            DEFAULT_EXIT_YEAR,
            DEFAULT_EXIT_VALUATION,
        );

        assert!((result.moic - 2.00).abs() < 0.005);
        assert!((result.irr - 41.4).abs() < 0.05);
    }

    #[test]
    fn zero_investment_has_zero_moic() {
        let result = calculate_roi(0.0, 33e6, 240e6, 0.0, 10.0, 4.0);
        assert_eq!(result.moic, 0.0);
        assert_eq!(result.irr, 0.0);
        assert!(close(result.exit_value, 24e6));
        assert!(close(result.absolute_return, 24e6));
    }

    #[test]
    fn zero_horizon_has_zero_irr() {
        let result = calculate_roi(1e6, 10e6, 100e6, 10.0, 10.0, 0.0);
        assert!(close(result.moic, 10.0));
        assert_eq!(result.irr, 0.0);
    }

    #[test]
    fn negative_horizon_has_zero_irr() {
        let result = calculate_roi(1e6, 10e6, 100e6, 10.0, 10.0, -2.0);
        assert!(close(result.moic, 10.0));
        assert_eq!(result.irr, 0.0);
        assert_eq!(result.years_held, -2.0);
        assert_eq!(simple_annualized_return(10.0, -2.0), 0.0);
    }

    #[test]
    fn total_loss_has_zero_irr() {
        let result = calculate_roi(1e6, 10e6, 0.0, 10.0, 10.0, 5.0);
        assert_eq!(result.moic, 0.0);
        assert_eq!(result.irr, 0.0);
        assert!(close(result.absolute_return, -1e6));
    }

    #[test]
    fn loss_still_annualizes_negative() {
        //moic below one but positive still yields a negative rate
        let result = calculate_roi(1e6, 10e6, 5e6, 10.0, 10.0, 1.0);
        assert!(close(result.moic, 0.5));
        assert!(close(result.irr, -50.0));
    }

    #[test]
    fn years_between_uses_calendar_days() {
        let entry = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let exit = NaiveDate::from_ymd_opt(2030, 4, 1).unwrap();
        assert!((years_between(entry, exit) - 4.0).abs() < 0.01);
        assert!(years_between(exit, entry) < 0.0);
    }
}
