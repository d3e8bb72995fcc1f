use crate::roi::{DEFAULT_EXIT_VALUATION, DEFAULT_EXIT_YEAR};
use crate::scenario::DEFAULT_SENSITIVITY_VALUATIONS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

//settings shared by every calculator command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfiguration {
    //directory holding the csv tables
    pub data_dir: PathBuf,

    //assumed exit event
    pub exit_year: i32,
    pub exit_valuation: f64,

    //exit valuations swept by the sensitivity command
    pub sensitivity_valuations: Vec<f64>,

    //round used when a command is not given one
    pub default_round: String,

    //rounds listed by the compare command
    pub compare_rounds: Vec<String>,
}

impl Default for CalculatorConfiguration {
    fn default() -> Self {
        CalculatorConfiguration {
            data_dir: PathBuf::from("data"),
            exit_year: DEFAULT_EXIT_YEAR,
            exit_valuation: DEFAULT_EXIT_VALUATION,
            sensitivity_valuations: DEFAULT_SENSITIVITY_VALUATIONS.to_vec(),
            default_round: "Series B".to_string(),
            compare_rounds: vec!["Series B".to_string(), "Series C".to_string()],
        }
    }
}

impl CalculatorConfiguration {
    //load configuration from a JSON file, missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: CalculatorConfiguration = serde_json::from_str(&contents)?;
        Ok(config)
    }

    //save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pitchroi.json");

        let mut config = CalculatorConfiguration::default();
        config.exit_year = 2031;
        config.to_json_file(&path).unwrap();

        let loaded = CalculatorConfiguration::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "exit_valuation": 300000000.0 }"#).unwrap();

        let loaded = CalculatorConfiguration::from_json_file(&path).unwrap();
        assert_eq!(loaded.exit_valuation, 300_000_000.0);
        assert_eq!(loaded.exit_year, DEFAULT_EXIT_YEAR);
        assert_eq!(loaded.sensitivity_valuations.len(), 5);
    }
}
