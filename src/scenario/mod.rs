pub mod comparison;
pub mod exit;
pub mod sensitivity;

pub use comparison::{best_by_moic, compare_rounds, percent_change, RoundAdvantage, RoundComparison};
pub use exit::ExitScenario;
pub use sensitivity::{sensitivity, SensitivityPoint, DEFAULT_SENSITIVITY_VALUATIONS};
