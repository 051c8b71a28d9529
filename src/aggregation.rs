//! Turns the raw event feed into the ordered cumulative daily series.

use chrono::{DateTime, NaiveTime, Utc};

use crate::data_types::{DailyPoint, TreeEvent};

/// Truncates a timestamp to its UTC start of day.
///
/// Every consumer that buckets or labels by day (aggregation, axis ticks)
/// must go through this single boundary so they agree on the bucketing.
pub fn day_start(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Groups raw events into one `DailyPoint` per distinct UTC day, carrying a
/// running cumulative total.
///
/// Input order does not matter; events are sorted internally (stable, ties
/// on equal timestamps are fine since only the day boundary is used). Empty
/// input yields an empty series.
pub fn aggregate(mut events: Vec<TreeEvent>) -> Vec<DailyPoint> {
    events.sort_by_key(|e| e.created_at);

    let mut grouped: Vec<DailyPoint> = Vec::new();
    let mut cumulative_total = 0.0;
    for event in events {
        cumulative_total += event.value;
        let date = day_start(event.created_at);
        match grouped.last_mut() {
            Some(tail) if tail.date == date => {
                tail.total += event.value;
                tail.cumulative = cumulative_total;
            }
            _ => grouped.push(DailyPoint {
                date,
                total: event.value,
                cumulative: cumulative_total,
            }),
        }
    }
    grouped
}
