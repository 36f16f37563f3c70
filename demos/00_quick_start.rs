/// quick start - interest on one overdue amount
use default_interest_rs::chrono::{TimeZone, Utc};
use default_interest_rs::{compute, Decimal, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 13,600 unpaid since march 17th, charged at 11.75% a year
    let result = compute(
        Money::from_major(13_600),
        Utc.with_ymd_and_hms(2023, 3, 17, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 10, 14, 0, 0, 0).unwrap(),
        Rate::from_annual_percentage(Decimal::new(1175, 2)),
        Rate::from_annual_percentage(Decimal::new(1175, 2)),
    );

    println!("days:     {}", result.day_count);
    println!("rate:     {}", result.rate_label());
    println!("interest: {}", result.interest_amount);
    println!("total:    {}", result.total_amount);

    Ok(())
}
