use serde::{Deserialize, Serialize};

use crate::errors::{InterestError, Result};
use crate::types::InterestKind;

/// days per year used to derive a daily rate
pub const DEFAULT_DAY_BASIS: u32 = 365;

/// how a range spanning several calendar years is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearSplit {
    /// start year to its year end, then end year from its start. Intervening
    /// years contribute nothing.
    #[default]
    TwoPeriod,
    /// one sub-period per calendar year, each at that year's rate
    PerYear,
}

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub interest_kind: InterestKind,
    pub year_split: YearSplit,
    pub day_basis: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            interest_kind: InterestKind::Default,
            year_split: YearSplit::TwoPeriod,
            day_basis: DEFAULT_DAY_BASIS,
        }
    }
}

impl CalculatorConfig {
    /// configuration that charges every intervening year at its own rate
    pub fn per_year() -> Self {
        Self {
            year_split: YearSplit::PerYear,
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: InterestKind) -> Self {
        self.interest_kind = kind;
        self
    }

    /// parse and validate a json configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    pub fn validate(&self) -> Result<()> {
        if self.day_basis == 0 {
            return Err(InterestError::InvalidConfiguration {
                message: "day basis must be positive".to_string(),
            });
        }
        Ok(())
    }
}
