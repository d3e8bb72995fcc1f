use pitchroi::prelude::*;
use std::path::PathBuf;

fn data() -> DataSet {
    DataSet::load(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")).unwrap()
}

#[test]
fn series_b_beats_series_c_for_same_cheque() {
    let data = data();
    let rounds = [data.round("Series B").unwrap(), data.round("Series C").unwrap()];

    let comparisons = compare_rounds(rounds, 5_000_000.0, 2030, DEFAULT_EXIT_VALUATION);

    assert_eq!(comparisons.len(), 2);
    assert_eq!(comparisons[0].investment, 5_000_000.0);
    assert_eq!(best_by_moic(&comparisons).unwrap().round, "Series B");
}

#[test]
fn conservative_exit_lowers_returns() {
    let data = data();
    let round = data.round("Series B").unwrap();

    let base = round
        .investment_input(2_000_000.0, 2030, ExitScenario::Ipo.exit_valuation(240e6))
        .calculate();
    let low = round
        .investment_input(
            2_000_000.0,
            2030,
            ExitScenario::Conservative.exit_valuation(240e6),
        )
        .calculate();

    assert!((low.moic / base.moic - 0.8).abs() < 1e-9);
    assert!(low.irr < base.irr);
}

#[test]
fn sensitivity_sweep_over_defaults() {
    let data = data();
    let round = data.round("Series_B").unwrap();

    let points = sensitivity(round, 2_000_000.0, 2030, &DEFAULT_SENSITIVITY_VALUATIONS);
    let labels: Vec<_> = points.iter().map(|p| multiple(p.moic)).collect();

    assert_eq!(labels, vec!["3.23x", "4.04x", "4.85x", "5.66x", "6.46x"]);
    assert_eq!(percentage(points[0].irr), "34.1%");
    assert_eq!(percentage(points[4].irr), "59.5%");
}

#[test]
fn comparison_exports_to_csv() {
    let data = data();
    let comparisons = compare_rounds(data.rounds.values(), 1_000_000.0, 2030, 240e6);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compare.csv");
    write_comparison_csv(&comparisons, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "round");
    assert_eq!(reader.records().count(), 4);
}

#[test]
fn series_b_advantage_from_shipped_rounds() {
    let data = data();
    let rounds = [data.round("Series B").unwrap(), data.round("Series C").unwrap()];
    let comparisons = compare_rounds(rounds, 20_000_000.0, 2030, DEFAULT_EXIT_VALUATION);

    let advantage = RoundAdvantage::between(&comparisons[0], &comparisons[1]);
    assert!((advantage.capital_change_pct - percent_change(20e6, 8e6)).abs() < 1e-9);
    assert!((advantage.entry_valuation_change_pct + 67.0).abs() < 1e-9);
    assert_eq!(multiple(advantage.moic_ratio), "2.42x");
}
