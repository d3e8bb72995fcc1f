pub mod calculator_config;

pub use calculator_config::CalculatorConfiguration;
