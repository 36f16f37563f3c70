use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use crate::config::{CalculatorConfig, YearSplit};
use crate::decimal::{round_half_away, Money, Rate, CENT_DP};
use crate::errors::Result;
use crate::interest::day_count::{day_diff, year_end, year_start};
use crate::rates::RateProvider;
use crate::types::{CalculationInput, CalculationResult, SubPeriod};

/// sub-period together with the interest it accrued at full precision
struct Accrual {
    period: SubPeriod,
    raw_interest: Decimal,
}

/// engine for simple default interest over a date range
#[derive(Debug, Clone, Default)]
pub struct DefaultInterestEngine {
    pub config: CalculatorConfig,
}

impl DefaultInterestEngine {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// calculate interest for one input
    ///
    /// Inside a single calendar year the whole range accrues at the start
    /// year rate. Across a year boundary the range is split in two: the start
    /// date to december 31st 23:59:59 of the start year at the start year
    /// rate, and january 1st of the end year to the end date at the end year
    /// rate. Years in between are not charged.
    pub fn compute(&self, input: &CalculationInput) -> CalculationResult {
        let start_year = input.start_date.year();
        let end_year = input.end_date.year();

        let accruals = if start_year == end_year {
            vec![self.accrue(input.principal, input.start_date, input.end_date, input.start_year_rate)]
        } else {
            vec![
                self.accrue(
                    input.principal,
                    input.start_date,
                    year_end(start_year),
                    input.start_year_rate,
                ),
                self.accrue(
                    input.principal,
                    year_start(end_year),
                    input.end_date,
                    input.end_year_rate,
                ),
            ]
        };

        self.settle(input, accruals)
    }

    /// calculate interest, taking the rates from `provider`
    ///
    /// With [`YearSplit::PerYear`] every calendar year in the range is charged
    /// at its own rate, so a rate must exist for each of them.
    pub fn compute_with_provider<P: RateProvider + ?Sized>(
        &self,
        principal: Money,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        provider: &P,
    ) -> Result<CalculationResult> {
        let start_year_rate = provider.rate_for_date(start_date)?.rate;
        let end_year_rate = provider.rate_for_date(end_date)?.rate;

        let input = CalculationInput::new(principal, start_date, end_date, start_year_rate, end_year_rate)
            .with_kind(self.config.interest_kind);

        let start_year = start_date.year();
        let end_year = end_date.year();
        if self.config.year_split == YearSplit::TwoPeriod || start_year >= end_year {
            return Ok(self.compute(&input));
        }

        let mut accruals = Vec::with_capacity((end_year - start_year + 1) as usize);
        for year in start_year..=end_year {
            let from = if year == start_year { start_date } else { year_start(year) };
            let to = if year == end_year { end_date } else { year_end(year) };
            let rate = if year == start_year {
                start_year_rate
            } else if year == end_year {
                end_year_rate
            } else {
                provider.rate_for_year(year)?.rate
            };
            accruals.push(self.accrue(principal, from, to, rate));
        }

        Ok(self.settle(&input, accruals))
    }

    fn accrue(&self, principal: Money, start: DateTime<Utc>, end: DateTime<Utc>, rate: Rate) -> Accrual {
        let days = day_diff(start, end);
        let raw_interest = principal.simple_interest(rate, days, self.config.day_basis);

        Accrual {
            period: SubPeriod {
                start,
                end,
                rate,
                days,
                interest: Money::from_decimal(raw_interest),
            },
            raw_interest,
        }
    }

    // interest is rounded once; the total is built from the rounded figure so
    // that total - principal always equals the reported interest
    fn settle(&self, input: &CalculationInput, accruals: Vec<Accrual>) -> CalculationResult {
        let raw_interest: Decimal = accruals.iter().map(|a| a.raw_interest).sum();
        let day_count: i64 = accruals.iter().map(|a| a.period.days).sum();

        let interest_amount = Money::from_decimal(round_half_away(raw_interest, CENT_DP));
        let total_amount = (input.principal + interest_amount).to_cents();

        CalculationResult {
            principal: input.principal,
            interest_amount,
            total_amount,
            day_count,
            nominal_rate: input.start_year_rate,
            final_rate: input.end_year_rate,
            start_date: input.start_date,
            end_date: input.end_date,
            interest_kind: input.interest_kind,
            periods: accruals.into_iter().map(|a| a.period).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InterestError;
    use crate::rates::{AnnualRate, RateTable};
    use crate::types::InterestKind;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn pct(p: Decimal) -> Rate {
        Rate::from_annual_percentage(p)
    }

    fn money(s: &str) -> Money {
        Money::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_cross_year_split() {
        let engine = DefaultInterestEngine::default();
        let input = CalculationInput::new(
            Money::from_major(10_000),
            date(2022, 12, 1),
            date(2023, 1, 31),
            pct(dec!(17.25)),
            pct(dec!(11.75)),
        );

        let result = engine.compute(&input);

        assert_eq!(result.periods.len(), 2);
        assert_eq!(result.periods[0].days, 31);
        assert_eq!(result.periods[0].rate, pct(dec!(17.25)));
        assert_eq!(result.periods[0].interest.to_cents(), money("146.51"));
        assert_eq!(result.periods[1].days, 30);
        assert_eq!(result.periods[1].rate, pct(dec!(11.75)));
        assert_eq!(result.periods[1].interest.to_cents(), money("96.58"));

        assert_eq!(result.day_count, 61);
        assert_eq!(result.interest_amount, money("243.08"));
        assert_eq!(result.total_amount, money("10243.08"));
        assert_eq!(result.nominal_rate, pct(dec!(17.25)));
        assert_eq!(result.final_rate, pct(dec!(11.75)));
    }

    #[test]
    fn test_same_day_is_free() {
        let engine = DefaultInterestEngine::default();
        let input = CalculationInput::new(
            Money::from_major(13_600),
            date(2023, 3, 17),
            date(2023, 3, 17),
            pct(dec!(11.75)),
            pct(dec!(11.75)),
        );

        let result = engine.compute(&input);

        assert_eq!(result.day_count, 0);
        assert_eq!(result.interest_amount, Money::ZERO);
        assert_eq!(result.total_amount, Money::from_major(13_600));
        assert_eq!(result.periods.len(), 1);
    }

    #[test]
    fn test_same_year() {
        let engine = DefaultInterestEngine::default();
        let input = CalculationInput::new(
            Money::from_major(13_600),
            date(2023, 3, 17),
            date(2023, 10, 14),
            pct(dec!(11.75)),
            pct(dec!(48)),
        );

        let result = engine.compute(&input);

        // end year rate plays no part inside one year
        assert_eq!(result.day_count, 211);
        assert_eq!(result.interest_amount, money("923.78"));
        assert_eq!(result.total_amount, money("14523.78"));
        assert_eq!(result.nominal_rate, pct(dec!(11.75)));
    }

    #[test]
    fn test_end_time_of_day_counts_as_a_day() {
        let engine = DefaultInterestEngine::default();
        let input = CalculationInput::new(
            Money::from_major(36_500),
            date(2023, 3, 17),
            Utc.with_ymd_and_hms(2023, 3, 17, 9, 30, 0).unwrap(),
            pct(dec!(10)),
            pct(dec!(10)),
        );

        let result = engine.compute(&input);

        assert_eq!(result.day_count, 1);
        assert_eq!(result.interest_amount, money("10.00"));
    }

    #[test]
    fn test_reversed_range_goes_negative() {
        let engine = DefaultInterestEngine::default();
        let input = CalculationInput::new(
            Money::from_major(10_000),
            date(2023, 3, 17),
            date(2023, 3, 7),
            pct(dec!(11.75)),
            pct(dec!(11.75)),
        );

        let result = engine.compute(&input);

        assert_eq!(result.day_count, -10);
        assert_eq!(result.interest_amount, money("-32.19"));
        assert_eq!(result.total_amount, money("9967.81"));
    }

    #[test]
    fn test_reversed_range_across_years_runs_forward() {
        let engine = DefaultInterestEngine::default();
        let input = CalculationInput::new(
            Money::from_major(10_000),
            date(2024, 3, 1),
            date(2023, 5, 1),
            pct(dec!(48)),
            pct(dec!(11.75)),
        );

        let result = engine.compute(&input);

        // 2024-03-01 to 2024 year end, then 2023-01-01 to 2023-05-01
        assert_eq!(result.periods.len(), 2);
        assert_eq!(result.periods[0].days, 306);
        assert_eq!(result.periods[0].rate, pct(dec!(48)));
        assert_eq!(result.periods[1].days, 120);
        assert_eq!(result.periods[1].rate, pct(dec!(11.75)));
        assert_eq!(result.day_count, 426);
        assert_eq!(result.interest_amount, money("4410.41"));
        assert_eq!(result.total_amount, money("14410.41"));
    }

    #[test]
    fn test_negative_principal_passes_through() {
        let engine = DefaultInterestEngine::default();
        let input = CalculationInput::new(
            Money::from_major(-10_000),
            date(2023, 1, 1),
            date(2023, 1, 31),
            pct(dec!(11.75)),
            pct(dec!(11.75)),
        );

        let result = engine.compute(&input);

        assert_eq!(result.day_count, 30);
        assert_eq!(result.principal, Money::from_major(-10_000));
        assert_eq!(result.interest_amount, money("-96.58"));
        assert_eq!(result.total_amount, money("-10096.58"));
    }

    #[test]
    fn test_two_period_skips_intervening_years() {
        let engine = DefaultInterestEngine::default();
        let input = CalculationInput::new(
            Money::from_major(10_000),
            date(2021, 6, 1),
            date(2024, 2, 1),
            pct(dec!(10)),
            pct(dec!(20)),
        );

        let result = engine.compute(&input);

        assert_eq!(result.periods.len(), 2);
        assert_eq!(result.periods[0].days, 214);
        assert_eq!(result.periods[1].days, 31);
        assert_eq!(result.day_count, 245);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let engine = DefaultInterestEngine::default();
        let input = CalculationInput::new(
            money("9300.50"),
            date(2022, 4, 2),
            date(2024, 7, 9),
            pct(dec!(17.25)),
            pct(dec!(48)),
        );

        assert_eq!(engine.compute(&input), engine.compute(&input));
    }

    #[test]
    fn test_total_minus_principal_is_interest() {
        let engine = DefaultInterestEngine::default();
        let cases = [
            ("13600", date(2023, 3, 17), date(2024, 10, 14)),
            ("9300", date(2023, 4, 2), date(2023, 12, 31)),
            ("0.01", date(2022, 1, 1), date(2023, 1, 1)),
            ("123456.78", date(2022, 12, 31), date(2024, 1, 1)),
        ];

        for (amount, start, end) in cases {
            let input = CalculationInput::new(money(amount), start, end, pct(dec!(17.25)), pct(dec!(48)));
            let result = engine.compute(&input);
            assert_eq!(result.total_amount - result.principal, result.interest_amount);
        }
    }

    #[test]
    fn test_interest_kind_is_informational() {
        let engine = DefaultInterestEngine::default();
        let base = CalculationInput::new(
            Money::from_major(5_000),
            date(2023, 1, 1),
            date(2023, 6, 1),
            pct(dec!(11.75)),
            pct(dec!(11.75)),
        );

        let default_kind = engine.compute(&base);
        let legal = engine.compute(&base.clone().with_kind(InterestKind::Legal));

        assert_eq!(default_kind.interest_amount, legal.interest_amount);
        assert_eq!(legal.interest_kind, InterestKind::Legal);
    }

    #[test]
    fn test_provider_two_period() {
        let engine = DefaultInterestEngine::default();
        let rates = RateTable::standard();

        let result = engine
            .compute_with_provider(Money::from_major(10_000), date(2022, 6, 1), date(2024, 2, 1), &rates)
            .unwrap();

        assert_eq!(result.periods.len(), 2);
        assert_eq!(result.day_count, 245);
        assert_eq!(result.interest_amount, money("1419.04"));
        assert_eq!(result.nominal_rate, pct(dec!(17.25)));
        assert_eq!(result.final_rate, pct(dec!(48)));
    }

    #[test]
    fn test_provider_per_year() {
        let engine = DefaultInterestEngine::new(CalculatorConfig::per_year());
        let rates = RateTable::standard();

        let result = engine
            .compute_with_provider(Money::from_major(10_000), date(2022, 6, 1), date(2024, 2, 1), &rates)
            .unwrap();

        assert_eq!(result.periods.len(), 3);
        assert_eq!(result.periods[0].days, 214);
        assert_eq!(result.periods[1].days, 365);
        assert_eq!(result.periods[1].rate, pct(dec!(11.75)));
        assert_eq!(result.periods[2].days, 31);
        assert_eq!(result.day_count, 610);
        assert_eq!(result.interest_amount, money("2594.04"));
    }

    #[test]
    fn test_per_year_matches_two_period_across_one_boundary() {
        let rates = RateTable::standard();
        let two = DefaultInterestEngine::default();
        let per = DefaultInterestEngine::new(CalculatorConfig::per_year());

        let a = two
            .compute_with_provider(Money::from_major(10_000), date(2022, 12, 1), date(2023, 1, 31), &rates)
            .unwrap();
        let b = per
            .compute_with_provider(Money::from_major(10_000), date(2022, 12, 1), date(2023, 1, 31), &rates)
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_per_year_reversed_range_uses_two_periods() {
        let rates = RateTable::standard();
        let two = DefaultInterestEngine::default();
        let per = DefaultInterestEngine::new(CalculatorConfig::per_year());

        let expected = two
            .compute_with_provider(Money::from_major(10_000), date(2024, 3, 1), date(2023, 5, 1), &rates)
            .unwrap();
        let result = per
            .compute_with_provider(Money::from_major(10_000), date(2024, 3, 1), date(2023, 5, 1), &rates)
            .unwrap();

        assert_eq!(result, expected);
        assert_eq!(result.periods.len(), 2);
        assert_eq!(result.periods[0].days, 306);
        assert_eq!(result.periods[1].days, 120);
        assert_eq!(result.day_count, 426);
        assert_eq!(result.interest_amount, money("4410.41"));
    }

    #[test]
    fn test_per_year_needs_every_rate() {
        let rates = RateTable::new()
            .with_rate(AnnualRate::for_year(2022, pct(dec!(17.25)), Money::from_major(555)))
            .with_rate(AnnualRate::for_year(2024, pct(dec!(48)), Money::from_major(1310)));
        let engine = DefaultInterestEngine::new(CalculatorConfig::per_year());

        let result =
            engine.compute_with_provider(Money::from_major(10_000), date(2022, 6, 1), date(2024, 2, 1), &rates);

        assert!(matches!(result, Err(InterestError::RateNotFound { year: 2023 })));
    }

    #[test]
    fn test_provider_missing_start_year() {
        let engine = DefaultInterestEngine::default();
        let rates = RateTable::standard();

        let result =
            engine.compute_with_provider(Money::from_major(10_000), date(2021, 6, 1), date(2023, 2, 1), &rates);

        assert!(matches!(result, Err(InterestError::RateNotFound { year: 2021 })));
    }
}
