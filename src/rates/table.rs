use std::collections::BTreeMap;

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{InterestError, Result};
use crate::rates::{AnnualRate, RateProvider};

/// highest annual percentage accepted from configuration
pub const MAX_ANNUAL_PERCENTAGE: Decimal = dec!(1000);

/// json shape of one configured year
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RateEntry {
    /// annual percentage, e.g. "17.25"
    rate: Decimal,
    minimum_collection_fee: Money,
}

/// in-memory year to rate lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<i32, AnnualRate>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// the published central bank schedule for 2022 to 2024
    pub fn standard() -> Self {
        Self::new()
            .with_rate(AnnualRate::for_year(
                2022,
                Rate::from_annual_percentage(dec!(17.25)),
                Money::from_major(555),
            ))
            .with_rate(AnnualRate::for_year(
                2023,
                Rate::from_annual_percentage(dec!(11.75)),
                Money::from_major(800),
            ))
            .with_rate(AnnualRate::for_year(
                2024,
                Rate::from_annual_percentage(dec!(48.00)),
                Money::from_major(1310),
            ))
    }

    /// add or replace the rate for `rate.year`
    pub fn with_rate(mut self, rate: AnnualRate) -> Self {
        self.insert(rate);
        self
    }

    pub fn insert(&mut self, rate: AnnualRate) -> Option<AnnualRate> {
        self.rates.insert(rate.year, rate)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// configured years in ascending order
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.rates.keys().copied()
    }

    /// parse `{ "2023": { "rate": "11.75", "minimum_collection_fee": "800" } }`
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<i32, RateEntry> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (year, entry) in entries {
            if entry.rate.is_sign_negative() && !entry.rate.is_zero() {
                return Err(InterestError::InvalidConfiguration {
                    message: format!("negative rate {} for year {}", entry.rate, year),
                });
            }
            if entry.rate > MAX_ANNUAL_PERCENTAGE {
                return Err(InterestError::InvalidConfiguration {
                    message: format!(
                        "rate {} for year {} exceeds {}%",
                        entry.rate, year, MAX_ANNUAL_PERCENTAGE
                    ),
                });
            }
            table.insert(AnnualRate::for_year(
                year,
                Rate::from_annual_percentage(entry.rate),
                entry.minimum_collection_fee,
            ));
        }
        Ok(table)
    }

    pub fn json(&self) -> String {
        let entries: BTreeMap<i32, RateEntry> = self
            .rates
            .iter()
            .map(|(year, rate)| {
                (
                    *year,
                    RateEntry {
                        rate: rate.rate.as_percentage(),
                        minimum_collection_fee: rate.minimum_collection_fee,
                    },
                )
            })
            .collect();
        serde_json::to_string_pretty(&entries).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

impl RateProvider for RateTable {
    fn rate_for_year(&self, year: i32) -> Result<AnnualRate> {
        match self.rates.get(&year) {
            Some(rate) => Ok(rate.clone()),
            None => {
                warn!("no rate configured for year {}", year);
                Err(InterestError::RateNotFound { year })
            }
        }
    }
}
