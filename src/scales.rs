//! Pixel-space scale construction from series, viewport and transform.

use d3rs::scale::{LinearScale, Scale as D3Scale};

use crate::data_types::{DailyPoint, DisplayMode, Viewport, ZoomTransform};

/// Linear domain-to-pixel mapping with a safe inverse.
#[derive(Clone)]
pub struct ChartScale {
    scale: LinearScale,
    domain: (f64, f64),
    range: (f32, f32),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        // A single-day series collapses the domain; widen it so the
        // mapping stays invertible.
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let scale = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self {
            scale,
            domain: (d_min, d_max),
            range,
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.scale.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.scale.invert(pixel as f64).unwrap_or(0.0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.scale.ticks(count)
    }
}

/// The pair of scales the rendering layer consumes.
#[derive(Clone)]
pub struct Scales {
    pub x: ChartScale,
    pub y: ChartScale,
}

/// Builds fresh x/y scales from the current state, or `None` while the
/// series is empty ("nothing to render", not an error).
///
/// The x mapping composes the zoom transform translate-first, scale-second
/// on top of the base `[0, width]` range: pixel `p` becomes `p * k + x`, so
/// the domain stays `[first.date, last.date]` while the effective range is
/// `[t.x, t.x + width * t.k]`. Reversing that order would move the zoom's
/// visual anchor. The y mapping ignores the transform entirely (vertical
/// pan/zoom is locked) and spans `[0, max]` of whichever field the display
/// mode selects.
pub fn compute_scales(
    series: &[DailyPoint],
    viewport: Viewport,
    transform: ZoomTransform,
    display_mode: DisplayMode,
    axis_height: f32,
) -> Option<Scales> {
    let first = series.first()?;
    let last = series.last()?;

    let x_domain = (
        first.date.timestamp_millis() as f64,
        last.date.timestamp_millis() as f64,
    );
    let x_range = (
        transform.x as f32,
        (transform.x + viewport.width as f64 * transform.k) as f32,
    );
    let x = ChartScale::new_linear(x_domain, x_range);

    let y_max = series
        .iter()
        .map(|p| display_mode.accessor(p))
        .fold(0.0_f64, f64::max);
    let y = ChartScale::new_linear(
        (0.0, y_max),
        (0.0, viewport.height - axis_height * 2.0),
    );

    Some(Scales { x, y })
}
