use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use treeline::aggregation::{aggregate, day_start};
use treeline::data_types::TreeEvent;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn ev(s: &str, value: f64) -> TreeEvent {
    TreeEvent {
        created_at: ts(s),
        value,
    }
}

#[test]
fn test_day_start_truncates_to_utc_midnight() {
    assert_eq!(day_start(ts("2023-01-01T10:30:15Z")), ts("2023-01-01T00:00:00Z"));
    assert_eq!(day_start(ts("2023-01-01T23:59:59Z")), ts("2023-01-01T00:00:00Z"));
    assert_eq!(day_start(ts("2023-01-01T00:00:00Z")), ts("2023-01-01T00:00:00Z"));
}

#[test]
fn test_aggregate_empty_input() {
    assert!(aggregate(vec![]).is_empty());
}

#[test]
fn test_aggregate_groups_and_accumulates() {
    // Two events on Jan 1, one on Jan 2
    let series = aggregate(vec![
        ev("2023-01-01T10:00:00Z", 5.0),
        ev("2023-01-01T20:00:00Z", 3.0),
        ev("2023-01-02T09:00:00Z", 2.0),
    ]);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, ts("2023-01-01T00:00:00Z"));
    assert_eq!(series[0].total, 8.0);
    assert_eq!(series[0].cumulative, 8.0);
    assert_eq!(series[1].date, ts("2023-01-02T00:00:00Z"));
    assert_eq!(series[1].total, 2.0);
    assert_eq!(series[1].cumulative, 10.0);
}

#[test]
fn test_aggregate_sorts_unordered_input() {
    let series = aggregate(vec![
        ev("2023-01-02T09:00:00Z", 2.0),
        ev("2023-01-01T20:00:00Z", 3.0),
        ev("2023-01-01T10:00:00Z", 5.0),
    ]);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].total, 8.0);
    assert_eq!(series[1].cumulative, 10.0);
}

#[test]
fn test_aggregate_invariants_hold() {
    let mut events = Vec::new();
    for day in 1..=9 {
        for hour in [3, 11, 22] {
            events.push(ev(
                &format!("2023-03-{day:02}T{hour:02}:00:00Z"),
                (day * hour) as f64,
            ));
        }
    }
    events.shuffle(&mut rand::rng());

    let series = aggregate(events.clone());

    // Dates strictly increasing, cumulative non-decreasing
    for pair in series.windows(2) {
        assert!(pair[0].date < pair[1].date);
        assert!(pair[0].cumulative <= pair[1].cumulative);
    }

    // cumulative is the prefix sum of totals
    let mut running = 0.0;
    for point in &series {
        running += point.total;
        assert_eq!(point.cumulative, running);
    }

    // sum of totals equals the grand total
    let sum: f64 = series.iter().map(|p| p.total).sum();
    assert_eq!(sum, series.last().unwrap().cumulative);
    let event_sum: f64 = events.iter().map(|e| e.value).sum();
    assert_eq!(sum, event_sum);
}

#[test]
fn test_aggregate_insensitive_to_input_order() {
    let base = vec![
        ev("2023-01-01T10:00:00Z", 5.0),
        ev("2023-01-01T20:00:00Z", 3.0),
        ev("2023-01-02T09:00:00Z", 2.0),
        ev("2023-01-04T01:00:00Z", 7.0),
        ev("2023-01-04T23:00:00Z", 1.0),
    ];
    let expected = aggregate(base.clone());

    let mut rng = rand::rng();
    for _ in 0..20 {
        let mut shuffled = base.clone();
        shuffled.shuffle(&mut rng);
        assert_eq!(aggregate(shuffled), expected);
    }
}

#[test]
fn test_aggregate_duplicate_timestamps() {
    let series = aggregate(vec![
        ev("2023-01-01T10:00:00Z", 5.0),
        ev("2023-01-01T10:00:00Z", 3.0),
    ]);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].total, 8.0);
    assert_eq!(series[0].cumulative, 8.0);
}
