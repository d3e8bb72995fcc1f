use crate::data::RoiSummaryRecord;
use crate::format::{currency, format_percentage, multiple, percentage};
use crate::roi::{InvestmentInput, RoiResult};
use crate::scenario::{RoundComparison, SensitivityPoint};
use prettytable::{Cell, Row, Table};

fn metric_row(name: &str, value: String) -> Row {
    Row::new(vec![Cell::new(name), Cell::new(&value)])
}

fn header_row(names: &[&str]) -> Row {
    Row::new(names.iter().map(|name| Cell::new(name)).collect())
}

//metric/value table for a single investment
pub fn roi_table(input: &InvestmentInput, result: &RoiResult) -> Table {
    let mut table = Table::new();

    table.add_row(header_row(&["Metric", "Value"]));
    table.add_row(metric_row("Investment", currency(result.investment)));
    table.add_row(metric_row("Entry Valuation", currency(input.entry_valuation)));
    table.add_row(metric_row("Exit Valuation", currency(input.exit_valuation)));
    table.add_row(metric_row(
        "Initial Ownership",
        format_percentage(input.initial_ownership_pct, 3),
    ));
    table.add_row(metric_row(
        "Ownership at Exit",
        format_percentage(result.ownership_at_exit, 3),
    ));
    table.add_row(metric_row("Exit Value", currency(result.exit_value)));
    table.add_row(metric_row("Absolute Return", currency(result.absolute_return)));
    table.add_row(metric_row("MOIC", multiple(result.moic)));
    table.add_row(metric_row("Annualized Return", percentage(result.irr)));
    table.add_row(metric_row(
        "Holding Period",
        format!("{} years", result.years_held),
    ));

    table
}

pub fn comparison_table(comparisons: &[RoundComparison]) -> Table {
    let mut table = Table::new();

    table.add_row(header_row(&[
        "Round",
        "Investment",
        "Entry Valuation",
        "Exit Value",
        "MOIC",
        "IRR",
        "Years",
    ]));

    for c in comparisons {
        table.add_row(Row::new(vec![
            Cell::new(&c.round),
            Cell::new(&currency(c.investment)),
            Cell::new(&currency(c.entry_valuation)),
            Cell::new(&currency(c.result.exit_value)),
            Cell::new(&multiple(c.result.moic)),
            Cell::new(&percentage(c.result.irr)),
            Cell::new(&c.result.years_held.to_string()),
        ]));
    }

    table
}

//`base_valuation` marks the row of the base case
pub fn sensitivity_table(points: &[SensitivityPoint], base_valuation: f64) -> Table {
    let mut table = Table::new();

    table.add_row(header_row(&["Exit Valuation", "Exit Value", "MOIC", "IRR"]));

    for point in points {
        let mut label = currency(point.exit_valuation);
        if point.exit_valuation == base_valuation {
            label.push_str(" (Base)");
        }

        table.add_row(Row::new(vec![
            Cell::new(&label),
            Cell::new(&currency(point.exit_value)),
            Cell::new(&multiple(point.moic)),
            Cell::new(&percentage(point.irr)),
        ]));
    }

    table
}

//historical returns per round as published in the roi summary
pub fn summary_table<'a, I>(records: I) -> Table
where
    I: IntoIterator<Item = &'a RoiSummaryRecord>,
{
    let mut table = Table::new();

    table.add_row(header_row(&[
        "Round",
        "Year",
        "Status",
        "Investment",
        "Entry Valuation",
        "MOIC",
        "IRR",
        "Hold (yrs)",
    ]));

    for record in records {
        table.add_row(Row::new(vec![
            Cell::new(&record.round),
            Cell::new(&record.investment_year.to_string()),
            Cell::new(&record.status),
            Cell::new(&currency(record.investment_amount)),
            Cell::new(&currency(record.entry_valuation)),
            Cell::new(&multiple(record.moic)),
            Cell::new(&percentage(record.irr_pct)),
            Cell::new(&record.holding_period_years.to_string()),
        ]));
    }

    table
}
