/// cross-year - how a range is split when the rate changes at new year
use default_interest_rs::chrono::{TimeZone, Utc};
use default_interest_rs::{CalculatorConfig, DefaultInterestEngine, Money, RateTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let rates = RateTable::standard();
    let start = Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

    // default split only charges the first and last year
    let two_period = DefaultInterestEngine::default();
    let per_year = DefaultInterestEngine::new(CalculatorConfig::per_year());

    for (name, engine) in [("two period", &two_period), ("per year", &per_year)] {
        let result = engine.compute_with_provider(Money::from_major(10_000), start, end, &rates)?;

        println!("{} ({} days, interest {}):", name, result.day_count, result.interest_amount);
        for period in &result.periods {
            println!(
                "  {} .. {}  {:>4} days at {:>7}  {}",
                period.start.date_naive(),
                period.end.date_naive(),
                period.days,
                period.rate,
                period.interest.to_cents()
            );
        }
    }

    Ok(())
}
