//! IST clock helpers. The screeners cover NSE stocks, so every run is
//! stamped in Asia/Kolkata regardless of where the job runs.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Asia::Kolkata;
use chrono_tz::Tz;

pub const IST: Tz = Kolkata;

pub fn now_ist() -> DateTime<Tz> {
    Utc::now().with_timezone(&IST)
}

/// Floor a timestamp to its 10-minute bucket (9:23 -> 9:20, 9:04 -> 9:00),
/// zeroing seconds and subseconds.
pub fn run_bucket(ts: DateTime<Tz>) -> DateTime<Tz> {
    let minute = ts.minute() - ts.minute() % 10;
    ts.with_minute(minute)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

/// The calendar date of the run's 10-minute bucket. This is what gets
/// stored as `screener_date` on every record of a batch.
pub fn run_date_bucket(ts: DateTime<Tz>) -> NaiveDate {
    run_bucket(ts).date_naive()
}
