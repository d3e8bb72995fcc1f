use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use pitchroi::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pitchroi")]
#[command(about = "Investor return calculator for funding-round pitch data", long_about = None)]
struct Cli {
    //optional json configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    //debug logging
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    //compute returns from explicit ownership figures
    Roi {
        #[arg(long)]
        investment: f64,

        //post-money valuation at entry
        #[arg(long)]
        entry_valuation: f64,

        #[arg(long)]
        exit_valuation: f64,

        //ownership % at entry
        #[arg(long)]
        initial_ownership: f64,

        //ownership % at exit, after dilution
        #[arg(long)]
        final_ownership: f64,

        //holding period in years
        #[arg(long, conflicts_with_all = ["entry_date", "exit_date"])]
        years: Option<f64>,

        //entry date (yyyy-mm-dd), used with --exit-date instead of --years
        #[arg(long, requires = "exit_date")]
        entry_date: Option<NaiveDate>,

        #[arg(long, requires = "entry_date")]
        exit_date: Option<NaiveDate>,

        #[arg(long)]
        json: bool,
    },

    //returns for a custom cheque into a funding round
    Invest {
        //round name (seed, series a, series b, series c)
        #[arg(long)]
        round: Option<String>,

        #[arg(long)]
        investment: f64,

        //round year, read from the data directory when omitted
        #[arg(long, requires = "post_money")]
        round_year: Option<i32>,

        //round post-money valuation, read from the data directory when omitted
        #[arg(long, requires = "round_year")]
        post_money: Option<f64>,

        #[arg(long)]
        exit_year: Option<i32>,

        #[arg(long, conflicts_with = "scenario")]
        exit_valuation: Option<f64>,

        //ipo, conservative or optimistic
        #[arg(long)]
        scenario: Option<String>,

        #[arg(long)]
        data_dir: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    //same cheque across several rounds
    Compare {
        #[arg(long)]
        investment: f64,

        //rounds to compare (comma separated)
        #[arg(long, value_delimiter = ',')]
        rounds: Vec<String>,

        #[arg(long)]
        scenario: Option<String>,

        #[arg(long)]
        data_dir: Option<PathBuf>,

        //output path for comparison csv
        #[arg(long)]
        output_csv: Option<PathBuf>,
    },

    //returns across a range of exit valuations
    Sensitivity {
        #[arg(long)]
        round: Option<String>,

        #[arg(long)]
        investment: f64,

        //exit valuations to sweep (comma separated)
        #[arg(long, value_delimiter = ',')]
        valuations: Vec<f64>,

        #[arg(long)]
        exit_year: Option<i32>,

        #[arg(long)]
        data_dir: Option<PathBuf>,

        //output path for sensitivity csv
        #[arg(long)]
        output_csv: Option<PathBuf>,
    },

    //published returns for every round
    Summary {
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    //write the default configuration to a file
    InitConfig { path: PathBuf },
}

//filter used when RUST_LOG is not set
fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<CalculatorConfiguration> {
    match path {
        Some(path) => CalculatorConfiguration::from_json_file(path)
            .context(format!("Failed to load configuration from {:?}", path)),
        None => Ok(CalculatorConfiguration::default()),
    }
}

fn load_data(config: &CalculatorConfiguration, data_dir: Option<PathBuf>) -> Result<DataSet> {
    let data_dir = data_dir.unwrap_or_else(|| config.data_dir.clone());
    debug!(data_dir = %data_dir.display(), "loading data");
    DataSet::load(&data_dir).context(format!("Failed to load data from {:?}", data_dir))
}

//exit valuation and the label it is reported under
fn resolve_exit_valuation(
    config: &CalculatorConfiguration,
    exit_valuation: Option<f64>,
    scenario: Option<&str>,
) -> Result<(f64, &'static str)> {
    if let Some(value) = exit_valuation {
        return Ok((value, "Custom"));
    }

    let scenario = match scenario {
        Some(name) => ExitScenario::parse(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown exit scenario: {}", name))?,
        None => ExitScenario::Ipo,
    };
    Ok((scenario.exit_valuation(config.exit_valuation), scenario.label()))
}

fn warn_on_input(input: &InvestmentInput, round_name: &str) {
    if FundingRound::parse(round_name).is_none() {
        warn!(
            "Round '{}' has no dilution data; assuming no dilution to exit",
            round_name
        );
    }
    for warning in input.warnings() {
        warn!("{}", warning);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Roi {
            investment,
            entry_valuation,
            exit_valuation,
            initial_ownership,
            final_ownership,
            years,
            entry_date,
            exit_date,
            json,
        } => {
            let years_held = match (years, entry_date, exit_date) {
                (Some(years), _, _) => years,
                (None, Some(entry), Some(exit)) => years_between(entry, exit),
                _ => anyhow::bail!("Either --years or --entry-date/--exit-date is required"),
            };

            let input = InvestmentInput::from_ownership(
                investment,
                entry_valuation,
                exit_valuation,
                initial_ownership,
                final_ownership,
                years_held,
            );
            for warning in input.warnings() {
                warn!("{}", warning);
            }

            let result = calculate_roi(
                investment,
                entry_valuation,
                exit_valuation,
                initial_ownership,
                final_ownership,
                years_held,
            );
            print_result(&input, &result, json)?;
        }

        Commands::Invest {
            round,
            investment,
            round_year,
            post_money,
            exit_year,
            exit_valuation,
            scenario,
            data_dir,
            json,
        } => {
            let round = round.unwrap_or_else(|| config.default_round.clone());
            let exit_year = exit_year.unwrap_or(config.exit_year);
            let (exit_valuation, scenario_label) =
                resolve_exit_valuation(&config, exit_valuation, scenario.as_deref())?;

            let input = match (round_year, post_money) {
                (Some(year), Some(post_money)) => InvestmentInput::for_round(
                    investment,
                    &round,
                    year,
                    post_money,
                    exit_year,
                    exit_valuation,
                ),
                _ => {
                    let data = load_data(&config, data_dir)?;
                    data.round(&round)?
                        .investment_input(investment, exit_year, exit_valuation)
                }
            };
            warn_on_input(&input, &round);

            let result = input.calculate();

            if !json {
                println!("{} Investment Analysis", round);
                println!(
                    "Exit: {} {} in {}\n",
                    scenario_label,
                    currency(exit_valuation),
                    exit_year
                );
            }
            print_result(&input, &result, json)?;
        }

        Commands::Compare {
            investment,
            rounds,
            scenario,
            data_dir,
            output_csv,
        } => {
            let (exit_valuation, scenario_label) =
                resolve_exit_valuation(&config, None, scenario.as_deref())?;
            let data = load_data(&config, data_dir)?;

            let names = if rounds.is_empty() {
                config.compare_rounds.clone()
            } else {
                rounds
            };
            let selected = names
                .iter()
                .map(|name| data.round(name))
                .collect::<Result<Vec<_>, _>>()?;

            let comparisons =
                compare_rounds(selected, investment, config.exit_year, exit_valuation);

            println!(
                "Round Comparison for {} at {} exit ({})\n",
                currency(investment),
                currency(exit_valuation),
                scenario_label
            );
            comparison_table(&comparisons).printstd();

            if let Some(best) = best_by_moic(&comparisons) {
                println!(
                    "\nBest return: {} with {} MOIC and {} IRR",
                    best.round,
                    multiple(best.result.moic),
                    percentage(best.result.irr)
                );
            }

            if let [ours, baseline] = comparisons.as_slice() {
                let advantage = RoundAdvantage::between(ours, baseline);
                println!(
                    "{} vs {}: {:+.0}% capital, {:+.0}% entry valuation, {} multiple, {:+.1}pp IRR",
                    ours.round,
                    baseline.round,
                    advantage.capital_change_pct,
                    advantage.entry_valuation_change_pct,
                    multiple(advantage.moic_ratio),
                    advantage.irr_spread
                );
            }

            if let Some(path) = output_csv {
                write_comparison_csv(&comparisons, &path)?;
                println!("\nComparison saved to {:?}", path);
            }
        }

        Commands::Sensitivity {
            round,
            investment,
            valuations,
            exit_year,
            data_dir,
            output_csv,
        } => {
            let round = round.unwrap_or_else(|| config.default_round.clone());
            let exit_year = exit_year.unwrap_or(config.exit_year);
            let valuations = if valuations.is_empty() {
                config.sensitivity_valuations.clone()
            } else {
                valuations
            };

            let data = load_data(&config, data_dir)?;
            let record = data.round(&round)?;
            let points = sensitivity(record, investment, exit_year, &valuations);

            println!(
                "Return Sensitivity to Exit Valuation ({}, {})\n",
                record.display_name(),
                currency(investment)
            );
            sensitivity_table(&points, config.exit_valuation).printstd();

            if let Some(path) = output_csv {
                write_sensitivity_csv(&points, &path)?;
                println!("\nSensitivity saved to {:?}", path);
            }
        }

        Commands::Summary { data_dir } => {
            let data = load_data(&config, data_dir)?;

            println!("Investor Returns by Round");
            println!("=========================\n");
            summary_table(data.summary.values()).printstd();
            println!(
                "\nAll projections based on IPO exit at {} valuation in {}",
                currency(config.exit_valuation),
                config.exit_year
            );
        }

        Commands::InitConfig { path } => {
            config.to_json_file(&path)?;
            println!("Configuration written to {:?}", path);
        }
    }

    Ok(())
}

fn print_result(input: &InvestmentInput, result: &RoiResult, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(result)?);
    } else {
        roi_table(input, result).printstd();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_enables_debug() {
        let cli = Cli::parse_from(["pitchroi", "-v", "summary"]);
        assert!(cli.verbose);
        assert_eq!(default_log_level(cli.verbose), "debug");

        let cli = Cli::parse_from(["pitchroi", "summary"]);
        assert_eq!(default_log_level(cli.verbose), "warn");
    }

    #[test]
    fn roi_command_accepts_zero_ownership() {
        let cli = Cli::parse_from([
            "pitchroi",
            "roi",
            "--investment",
            "1000000",
            "--entry-valuation",
            "10000000",
            "--exit-valuation",
            "100000000",
            "--initial-ownership",
            "0",
            "--final-ownership",
            "0",
            "--years",
            "4",
        ]);

        match cli.command {
            Commands::Roi {
                initial_ownership,
                final_ownership,
                years,
                ..
            } => {
                let input = InvestmentInput::from_ownership(
                    1e6,
                    10e6,
                    100e6,
                    initial_ownership,
                    final_ownership,
                    years.unwrap_or_default(),
                );
                assert_eq!(
                    input.warnings(),
                    vec![InputWarning::OwnershipOutOfRange(0.0)]
                );
            }
            _ => panic!("expected the roi command"),
        }
    }
}
