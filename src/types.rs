use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// legal classification of the interest being claimed
///
/// Carried through to results for display. It does not change the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterestKind {
    /// statutory interest
    Legal,
    /// commercial interest between merchants
    Commercial,
    /// interest owed for late payment
    #[default]
    Default,
}

/// inputs of a single interest calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub principal: Money,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// annual rate applied to the part of the range inside the start year
    pub start_year_rate: Rate,
    /// annual rate applied to the part of the range inside the end year
    pub end_year_rate: Rate,
    pub interest_kind: InterestKind,
}

impl CalculationInput {
    pub fn new(
        principal: Money,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        start_year_rate: Rate,
        end_year_rate: Rate,
    ) -> Self {
        Self {
            principal,
            start_date,
            end_date,
            start_year_rate,
            end_year_rate,
            interest_kind: InterestKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: InterestKind) -> Self {
        self.interest_kind = kind;
        self
    }

    pub fn spans_year_boundary(&self) -> bool {
        self.start_date.year() != self.end_date.year()
    }
}

/// one contiguous stretch of a calculation inside a single calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub rate: Rate,
    pub days: i64,
    /// unrounded interest at money precision
    pub interest: Money,
}

/// outcome of a single interest calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub principal: Money,
    /// interest rounded to cents
    pub interest_amount: Money,
    /// principal plus the rounded interest, in cents
    pub total_amount: Money,
    pub day_count: i64,
    /// rate of the start year
    pub nominal_rate: Rate,
    /// rate of the end year, equal to the nominal rate inside a single year
    pub final_rate: Rate,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub interest_kind: InterestKind,
    pub periods: Vec<SubPeriod>,
}

impl CalculationResult {
    pub fn spans_year_boundary(&self) -> bool {
        self.start_date.year() != self.end_date.year()
    }

    /// rate label as printed on reports: `%17.25` or `%17.25 - %11.75`
    pub fn rate_label(&self) -> String {
        if self.spans_year_boundary() {
            format!(
                "%{} - %{}",
                self.nominal_rate.as_percentage(),
                self.final_rate.as_percentage()
            )
        } else {
            format!("%{}", self.nominal_rate.as_percentage())
        }
    }
}
