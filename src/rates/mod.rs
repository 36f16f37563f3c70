pub mod table;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::interest::day_count::{year_end, year_start};

pub use table::RateTable;

/// published default interest rate for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualRate {
    pub year: i32,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub rate: Rate,
    /// smallest amount worth pursuing in that year; carried as data only
    pub minimum_collection_fee: Money,
}

impl AnnualRate {
    /// rate valid from january 1st to december 31st of `year`
    pub fn for_year(year: i32, rate: Rate, minimum_collection_fee: Money) -> Self {
        Self {
            year,
            valid_from: year_start(year).date_naive(),
            valid_to: year_end(year).date_naive(),
            rate,
            minimum_collection_fee,
        }
    }
}

/// source of annual rates, one per calendar year
pub trait RateProvider {
    /// rate for `year`, or [`InterestError::RateNotFound`](crate::errors::InterestError::RateNotFound)
    fn rate_for_year(&self, year: i32) -> Result<AnnualRate>;

    /// rate for the calendar year containing `date`
    fn rate_for_date(&self, date: DateTime<Utc>) -> Result<AnnualRate> {
        self.rate_for_year(date.year())
    }
}

impl<P: RateProvider + ?Sized> RateProvider for &P {
    fn rate_for_year(&self, year: i32) -> Result<AnnualRate> {
        (**self).rate_for_year(year)
    }
}
