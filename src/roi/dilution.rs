use serde::{Deserialize, Serialize};

//funding rounds with a documented ownership path to the ipo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundingRound {
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
}

impl FundingRound {
    pub const ALL: [FundingRound; 4] = [
        FundingRound::Seed,
        FundingRound::SeriesA,
        FundingRound::SeriesB,
        FundingRound::SeriesC,
    ];

    //parse a round name, tolerating "Series B", "Series_B", "series-b" and "b"
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_round_name(s).as_str() {
            "seed" => Some(FundingRound::Seed),
            "series_a" | "a" => Some(FundingRound::SeriesA),
            "series_b" | "b" => Some(FundingRound::SeriesB),
            "series_c" | "c" => Some(FundingRound::SeriesC),
            _ => None,
        }
    }

    //display name as used in the pitch tables
    pub fn name(&self) -> &'static str {
        match self {
            FundingRound::Seed => "Seed",
            FundingRound::SeriesA => "Series A",
            FundingRound::SeriesB => "Series B",
            FundingRound::SeriesC => "Series C",
        }
    }

    //(ownership % at entry, ownership % at ipo) from the cap table
    pub fn documented_ownership(&self) -> (f64, f64) {
        match self {
            FundingRound::Seed => (25.0, 9.02),
            FundingRound::SeriesA => (28.57, 14.43),
            FundingRound::SeriesB => (24.24, 16.16),
            FundingRound::SeriesC => (20.0, 16.67),
        }
    }

    //fraction of entry ownership still held at exit
    pub fn dilution_factor(&self) -> f64 {
        let (initial, exit) = self.documented_ownership();
        exit / initial
    }
}

impl std::fmt::Display for FundingRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//dilution factor for a round name, 1.0 (no dilution) when the round is not in the table
pub fn dilution_factor_for(round_name: &str) -> f64 {
    FundingRound::parse(round_name)
        .map(|round| round.dilution_factor())
        .unwrap_or(1.0)
}

//lowercase, trimmed, with spaces and dashes folded into underscores
pub fn normalize_round_name(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}
