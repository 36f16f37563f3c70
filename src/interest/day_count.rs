use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// whole days between two instants, partial days rounded up
///
/// `ceil((end - start) / 1 day)` at full clock precision. A reversed range
/// gives a negative count, rounded toward zero.
pub fn day_diff(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let diff = end - start;
    let days = diff.num_days();
    if diff > Duration::days(days) {
        days + 1
    } else {
        days
    }
}

/// january 1st of `year`, 00:00:00
pub fn year_start(year: i32) -> DateTime<Utc> {
    let date = NaiveDate::from_yo_opt(year, 1).unwrap_or(NaiveDate::MIN);
    date.and_time(NaiveTime::MIN).and_utc()
}

/// december 31st of `year`, 23:59:59
pub fn year_end(year: i32) -> DateTime<Utc> {
    year_start(year + 1) - Duration::seconds(1)
}

/// calendar date anchored at midnight utc
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
