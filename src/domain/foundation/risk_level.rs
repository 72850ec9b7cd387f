//! RiskLevel value object for choice risk rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Risk associated with selecting a choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    #[default]
    None,
}

impl RiskLevel {
    /// All levels in the order the form offers them.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
        RiskLevel::None,
    ];

    /// Returns the wire name (`HIGH`, `MEDIUM`, `LOW`, `NONE`).
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
            RiskLevel::None => "NONE",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        RiskLevel::ALL
            .into_iter()
            .find(|risk| risk.as_str() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "risk",
                    format!("expected HIGH, MEDIUM, LOW or NONE, got '{}'", s.trim()),
                )
            })
    }
}
