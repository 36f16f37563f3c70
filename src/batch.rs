use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use log::{debug, info, warn};

use crate::config::CalculatorConfig;
use crate::errors::{InterestError, Result};
use crate::interest::DefaultInterestEngine;
use crate::rates::RateProvider;
use crate::records::{CalculationRecord, RecordSource};
use crate::report::BatchReport;
use crate::types::CalculationResult;

/// runs the interest engine over a set of records
pub struct BatchCalculator<P: RateProvider> {
    engine: DefaultInterestEngine,
    provider: P,
}

impl<P: RateProvider> BatchCalculator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            engine: DefaultInterestEngine::default(),
            provider,
        }
    }

    pub fn with_config(mut self, config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        self.engine = DefaultInterestEngine::new(config);
        Ok(self)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.engine.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// interest on one record up to `end_date`
    pub fn calculate(&self, record: &CalculationRecord, end_date: DateTime<Utc>) -> Result<CalculationResult> {
        self.engine
            .compute_with_provider(record.amount, record.start_date, end_date, &self.provider)
    }

    /// calculate every record up to `end_date`
    ///
    /// Stops at the first record that cannot be calculated; no partial report
    /// is returned.
    pub fn run<S: RecordSource + ?Sized>(&self, source: &S, end_date: DateTime<Utc>) -> Result<BatchReport> {
        let records = source.records()?;
        if records.is_empty() {
            return Err(InterestError::EmptyBatch);
        }

        info!("calculating {} records up to {}", records.len(), end_date);

        let mut results = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let result = self.calculate(record, end_date).map_err(|e| {
                warn!("record {} ({} from {}) failed: {}", index, record.amount, record.start_date, e);
                e.at_record(index)
            })?;
            debug!(
                "record {}: {} over {} days -> interest {}",
                index, result.principal, result.day_count, result.interest_amount
            );
            results.push(result);
        }

        let report = BatchReport::new(end_date, results);
        info!(
            "batch done: principal {}, interest {}, total {}",
            report.totals.total_principal, report.totals.total_interest, report.totals.grand_total
        );
        Ok(report)
    }

    /// calculate every record up to the current time of `time`
    pub fn run_as_of<S: RecordSource + ?Sized>(&self, source: &S, time: &SafeTimeProvider) -> Result<BatchReport> {
        self.run(source, time.now())
    }
}
