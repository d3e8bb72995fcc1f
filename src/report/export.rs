use crate::scenario::{RoundComparison, SensitivityPoint};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ComparisonRow<'a> {
    round: &'a str,
    year: i32,
    investment: f64,
    entry_valuation: f64,
    exit_value: f64,
    absolute_return: f64,
    moic: f64,
    irr: f64,
    years_held: f64,
}

fn write_rows<T: Serialize>(rows: impl IntoIterator<Item = T>, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .context(format!("Failed to create CSV file: {:?}", path))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

pub fn write_sensitivity_csv(points: &[SensitivityPoint], path: &Path) -> Result<()> {
    write_rows(points, path)
}

pub fn write_comparison_csv(comparisons: &[RoundComparison], path: &Path) -> Result<()> {
    let rows = comparisons.iter().map(|c| ComparisonRow {
        round: &c.round,
        year: c.year,
        investment: c.investment,
        entry_valuation: c.entry_valuation,
        exit_value: c.result.exit_value,
        absolute_return: c.result.absolute_return,
        moic: c.result.moic,
        irr: c.result.irr,
        years_held: c.result.years_held,
    });

    write_rows(rows, path)
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
