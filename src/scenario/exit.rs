use serde::{Deserialize, Serialize};

//exit valuation assumptions relative to the base ipo valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitScenario {
    Ipo,
    Conservative,
    Optimistic,
}

impl ExitScenario {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ipo" | "base" => Some(ExitScenario::Ipo),
            "conservative" | "low" => Some(ExitScenario::Conservative),
            "optimistic" | "high" => Some(ExitScenario::Optimistic),
            _ => None,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ExitScenario::Ipo => 1.0,
            ExitScenario::Conservative => 0.8,
            ExitScenario::Optimistic => 1.2,
        }
    }

    pub fn exit_valuation(&self, base_valuation: f64) -> f64 {
        base_valuation * self.multiplier()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExitScenario::Ipo => "IPO",
            ExitScenario::Conservative => "Conservative (80% of IPO)",
            ExitScenario::Optimistic => "Optimistic (120% of IPO)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_valuations() {
        assert_eq!(ExitScenario::Ipo.exit_valuation(240e6), 240e6);
        assert!((ExitScenario::Conservative.exit_valuation(240e6) - 192e6).abs() < 1e-3);
        assert!((ExitScenario::Optimistic.exit_valuation(240e6) - 288e6).abs() < 1e-3);
    }

    #[test]
    fn parse_names() {
        assert_eq!(ExitScenario::parse("IPO"), Some(ExitScenario::Ipo));
        assert_eq!(
            ExitScenario::parse("conservative"),
            Some(ExitScenario::Conservative)
        );
        assert_eq!(ExitScenario::parse("moon"), None);
    }
}
