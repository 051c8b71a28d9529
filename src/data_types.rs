// Data structures for the planting chart core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Height in pixels reserved for one axis strip below the plot area.
pub const AXIS_HEIGHT: f32 = 30.0;

/// A single raw planting event as delivered by the remote feed.
/// Unordered on input; ordering is the aggregator's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeEvent {
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub value: f64,
}

/// One aggregated day of planting activity.
///
/// `date` is the UTC start-of-day boundary, `total` the sum of event values
/// on that day, `cumulative` the running sum over all days up to and
/// including this one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: DateTime<Utc>,
    pub total: f64,
    pub cumulative: f64,
}

/// Which `DailyPoint` field the y-scale and line consume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    Cumulative,
    Daily,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Cumulative, DisplayMode::Daily];

    /// Field selection is an exhaustive match, not a string lookup.
    pub fn accessor(&self, point: &DailyPoint) -> f64 {
        match self {
            DisplayMode::Cumulative => point.cumulative,
            DisplayMode::Daily => point.total,
        }
    }
}

/// User pan/zoom state applied on top of the base data-to-pixel mapping.
///
/// `k` is the uniform zoom factor and never drops below 1 (no zoom-out past
/// the full extent). `y` is carried but never consumed: vertical pan is
/// locked so the chart always shows its full vertical range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, k: 1.0 }
    }
}

/// Pixel dimensions of the chart container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Outcome of the one-shot ingestion task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IngestionStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// The single owning state for the chart core.
///
/// All mutation goes through [`crate::store::ChartEvent`] application;
/// derived consumers (scales, hit-testing, rendering) only ever read
/// snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartState {
    pub series: Vec<DailyPoint>,
    pub transform: ZoomTransform,
    pub viewport: Viewport,
    pub display_mode: DisplayMode,
    pub ingestion: IngestionStatus,
    pub axis_height: f32,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            transform: ZoomTransform::default(),
            // Provisional until the first Resized event reports the real
            // container size.
            viewport: Viewport {
                width: 10_000.0,
                height: 300.0,
            },
            display_mode: DisplayMode::default(),
            ingestion: IngestionStatus::default(),
            axis_height: AXIS_HEIGHT,
        }
    }
}

impl ChartState {
    /// Total trees planted over the whole series (0 while empty).
    pub fn grand_total(&self) -> f64 {
        self.series.last().map_or(0.0, |p| p.cumulative)
    }
}
