pub mod day_count;
pub mod engine;

use chrono::{DateTime, Utc};

use crate::decimal::{Money, Rate};
use crate::types::{CalculationInput, CalculationResult};

pub use day_count::{day_diff, midnight, year_end, year_start};
pub use engine::DefaultInterestEngine;

/// calculate default interest with the standard two-period year split
pub fn compute(
    principal: Money,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    start_year_rate: Rate,
    end_year_rate: Rate,
) -> CalculationResult {
    let input = CalculationInput::new(principal, start_date, end_date, start_year_rate, end_year_rate);
    DefaultInterestEngine::default().compute(&input)
}
