//! Risk level to starter portfolio lookup.

use crate::error::AdvisorError;
use std::{fmt, str::FromStr};

/// The risk levels the bot offers, from bonds only to equities only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    None,
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 6] = [
        RiskLevel::None,
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    /// Lower-case name as offered to the user.
    pub fn name(self) -> &'static str {
        match self {
            RiskLevel::None => "none",
            RiskLevel::VeryLow => "very low",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very high",
        }
    }

    pub fn allocation(self) -> &'static str {
        match self {
            RiskLevel::None => "100% bonds (AGG), 0% equities (SPY)",
            RiskLevel::VeryLow => "80% bonds (AGG), 20% equities (SPY)",
            RiskLevel::Low => "60% bonds (AGG), 40% equities (SPY)",
            RiskLevel::Medium => "40% bonds (AGG), 60% equities (SPY)",
            RiskLevel::High => "20% bonds (AGG), 80% equities (SPY)",
            RiskLevel::VeryHigh => "0% bonds (AGG), 100% equities (SPY)",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = AdvisorError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        RiskLevel::ALL
            .iter()
            .copied()
            .find(|level| level.name() == wanted)
            .ok_or_else(|| AdvisorError::UnknownRiskLevel(s.to_owned()))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The initial investment recommendation for a risk level named by the user.
pub fn recommendation(risk_level: &str) -> Result<&'static str, AdvisorError> {
    Ok(risk_level.parse::<RiskLevel>()?.allocation())
}
