/// batch report - several overdue amounts calculated up to "now"
use default_interest_rs::chrono::{NaiveDate, TimeZone, Utc};
use default_interest_rs::{
    BatchCalculator, CalculationRecord, JsonReportSink, Money, RateTable, ReportSink,
    SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // pin "now" so the output is reproducible
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap(),
    ));

    let records = vec![
        CalculationRecord::on_date(NaiveDate::from_ymd_opt(2023, 3, 17).unwrap(), Money::from_major(13_600)),
        CalculationRecord::on_date(NaiveDate::from_ymd_opt(2023, 4, 2).unwrap(), Money::from_major(9_300)),
        CalculationRecord::on_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), Money::from_major(4_250)),
    ];

    let calculator = BatchCalculator::new(RateTable::standard());
    let report = calculator.run_as_of(&records, &time)?;

    for row in report.rows() {
        println!(
            "{}  {:>10}  {:>10}  {:>10}  {:>4}  {}",
            row.start_date, row.principal, row.interest_amount, row.total_amount, row.day_count, row.rate_label
        );
    }
    println!(
        "TOTAL       {:>10}  {:>10}  {:>10}",
        report.totals.total_principal, report.totals.total_interest, report.totals.grand_total
    );

    let mut sink = JsonReportSink::new(std::io::stdout());
    sink.write_report(&report)?;

    Ok(())
}
