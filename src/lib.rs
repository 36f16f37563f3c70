pub mod batch;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod rates;
pub mod records;
pub mod report;
pub mod types;

// re-export key types
pub use batch::BatchCalculator;
pub use config::{CalculatorConfig, YearSplit};
pub use decimal::{Money, Rate};
pub use errors::{InterestError, Result};
pub use interest::{compute, day_diff, DefaultInterestEngine};
pub use rates::{AnnualRate, RateProvider, RateTable};
pub use records::{CalculationRecord, ManualEntry, RecordSource};
pub use report::{BatchReport, JsonReportSink, ReportRow, ReportSink, ReportTotals, ReportView};
pub use types::{CalculationInput, CalculationResult, InterestKind, SubPeriod};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
