use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{InterestError, Result};
use crate::types::CalculationResult;

/// sums over every row of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportTotals {
    pub total_principal: Money,
    pub total_interest: Money,
    /// total principal plus total interest
    pub grand_total: Money,
}

impl ReportTotals {
    pub fn from_results(results: &[CalculationResult]) -> Self {
        let (total_principal, total_interest) = results
            .iter()
            .fold((Money::ZERO, Money::ZERO), |(principal, interest), r| {
                (principal + r.principal, interest + r.interest_amount)
            });

        Self {
            total_principal,
            total_interest,
            grand_total: total_principal + total_interest,
        }
    }
}

/// one printable line of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub start_date: NaiveDate,
    pub principal: Money,
    pub interest_amount: Money,
    pub total_amount: Money,
    pub day_count: i64,
    pub rate_label: String,
}

impl From<&CalculationResult> for ReportRow {
    fn from(result: &CalculationResult) -> Self {
        Self {
            start_date: result.start_date.date_naive(),
            principal: result.principal,
            interest_amount: result.interest_amount,
            total_amount: result.total_amount,
            day_count: result.day_count,
            rate_label: result.rate_label(),
        }
    }
}

/// results of a batch, computed against one end date
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub end_date: DateTime<Utc>,
    pub results: Vec<CalculationResult>,
    pub totals: ReportTotals,
}

impl BatchReport {
    pub fn new(end_date: DateTime<Utc>, results: Vec<CalculationResult>) -> Self {
        let totals = ReportTotals::from_results(&results);
        Self {
            end_date,
            results,
            totals,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.results.iter().map(ReportRow::from).collect()
    }

    pub fn view(&self) -> ReportView {
        ReportView {
            end_date: self.end_date,
            rows: self.rows(),
            totals: self.totals,
        }
    }

    /// report as pretty printed json
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(&self.view()).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

/// serializable view of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportView {
    pub end_date: DateTime<Utc>,
    pub rows: Vec<ReportRow>,
    pub totals: ReportTotals,
}

/// destination for finished reports
pub trait ReportSink {
    fn write_report(&mut self, report: &BatchReport) -> Result<()>;
}

/// writes reports as json to any writer
pub struct JsonReportSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonReportSink<W> {
    fn write_report(&mut self, report: &BatchReport) -> Result<()> {
        if report.is_empty() {
            return Err(InterestError::EmptyBatch);
        }
        serde_json::to_writer_pretty(&mut self.writer, &report.view())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
