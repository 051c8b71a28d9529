//! Nearest-point lookup for hover feedback.

use crate::data_types::DailyPoint;
use crate::scales::ChartScale;

/// Maps a pointer pixel position to the closest point of the series.
///
/// Returns `None` for an empty series, a missing scale, or a missing
/// pointer — pointer-leave must be reported as `None`, never as pixel 0,
/// since 0 is a legitimate position. Degenerate inversions (NaN timestamps
/// from a collapsed scale) also yield `None`; hover lookup never errors.
pub fn nearest<'a>(
    series: &'a [DailyPoint],
    x_scale: Option<&ChartScale>,
    pointer_x: Option<f32>,
) -> Option<&'a DailyPoint> {
    let scale = x_scale?;
    let pixel = pointer_x?;
    if series.is_empty() {
        return None;
    }

    let ts = scale.invert(pixel);
    if !ts.is_finite() {
        return None;
    }

    // Insertion index of ts in the date-ordered series; the nearest point
    // is one of its two neighbors. Either neighbor can be absent at the
    // series boundaries, so both sides are guarded.
    let idx = series.partition_point(|p| (p.date.timestamp_millis() as f64) < ts);
    let left = idx.checked_sub(1).and_then(|i| series.get(i));
    let right = series.get(idx);

    match (left, right) {
        (Some(l), Some(r)) => {
            let dist_left = (ts - l.date.timestamp_millis() as f64).abs();
            let dist_right = (r.date.timestamp_millis() as f64 - ts).abs();
            Some(if dist_right < dist_left { r } else { l })
        }
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (None, None) => None,
    }
}
