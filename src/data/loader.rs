use crate::data::records::{FundingRoundRecord, RoiSummaryRecord};
use crate::roi::normalize_round_name;
use csv::ReaderBuilder;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const FUNDING_ROUNDS_FILE: &str = "funding_rounds_overview.csv";
pub const ROI_SUMMARY_FILE: &str = "investor_roi_summary.csv";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Data file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to parse {} at line {line}: {source}", path.display())]
    Csv {
        path: PathBuf,
        line: usize,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Unknown funding round: {0}")]
    UnknownRound(String),
}

//rows keyed by normalized round name, in file order
pub type RoundTable<T> = IndexMap<String, T>;

fn load_table<T, P, F>(path: P, round_of: F) -> Result<RoundTable<T>, DataError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: Fn(&T) -> &str,
{
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DataError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut table = IndexMap::new();

    for (index, result) in reader.deserialize().enumerate() {
        let record: T = result.map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            line: index + 2,
            source,
        })?;

        //later rows replace earlier ones for the same round
        table.insert(normalize_round_name(round_of(&record)), record);
    }

    debug!(path = %path.display(), rows = table.len(), "loaded table");

    Ok(table)
}

//loads funding_rounds_overview.csv
pub fn load_funding_rounds<P: AsRef<Path>>(
    path: P,
) -> Result<RoundTable<FundingRoundRecord>, DataError> {
    load_table(path, |r: &FundingRoundRecord| r.round.as_str())
}

//loads investor_roi_summary.csv
pub fn load_roi_summary<P: AsRef<Path>>(
    path: P,
) -> Result<RoundTable<RoiSummaryRecord>, DataError> {
    load_table(path, |r: &RoiSummaryRecord| r.round.as_str())
}

//the two tables the calculator pages read
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub rounds: RoundTable<FundingRoundRecord>,
    pub summary: RoundTable<RoiSummaryRecord>,
}

impl DataSet {
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self, DataError> {
        let data_dir = data_dir.as_ref();
        Ok(DataSet {
            rounds: load_funding_rounds(data_dir.join(FUNDING_ROUNDS_FILE))?,
            summary: load_roi_summary(data_dir.join(ROI_SUMMARY_FILE))?,
        })
    }

    pub fn round(&self, name: &str) -> Result<&FundingRoundRecord, DataError> {
        self.rounds
            .get(&normalize_round_name(name))
            .ok_or_else(|| DataError::UnknownRound(name.to_string()))
    }

    pub fn summary(&self, name: &str) -> Result<&RoiSummaryRecord, DataError> {
        self.summary
            .get(&normalize_round_name(name))
            .ok_or_else(|| DataError::UnknownRound(name.to_string()))
    }
}
