use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::interest::day_count::midnight;

/// an unpaid amount and the date it fell due
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub start_date: DateTime<Utc>,
    pub amount: Money,
}

impl CalculationRecord {
    pub fn new(start_date: DateTime<Utc>, amount: Money) -> Self {
        Self { start_date, amount }
    }

    /// record starting at midnight of a calendar date
    pub fn on_date(date: NaiveDate, amount: Money) -> Self {
        Self::new(midnight(date), amount)
    }
}

/// anything that can hand over records to calculate
pub trait RecordSource {
    fn records(&self) -> Result<Vec<CalculationRecord>>;
}

impl RecordSource for [CalculationRecord] {
    fn records(&self) -> Result<Vec<CalculationRecord>> {
        Ok(self.to_vec())
    }
}

impl RecordSource for Vec<CalculationRecord> {
    fn records(&self) -> Result<Vec<CalculationRecord>> {
        self.as_slice().records()
    }
}

/// a single record typed in by hand
#[derive(Debug, Clone, PartialEq)]
pub struct ManualEntry {
    pub record: CalculationRecord,
}

impl ManualEntry {
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self {
            record: CalculationRecord::on_date(date, amount),
        }
    }
}

impl RecordSource for ManualEntry {
    fn records(&self) -> Result<Vec<CalculationRecord>> {
        Ok(vec![self.record.clone()])
    }
}
