//! Event-driven state updates for the chart.
//!
//! The update logic lives in plain value-returning functions, independent of
//! any UI infrastructure, to facilitate testing. [`ChartStore`] wraps them in
//! the single-consumer event loop described by the concurrency model: UI
//! interactions and the one-shot ingestion delivery all funnel through one
//! mpsc channel and are applied in arrival order.

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::data_types::{ChartState, DailyPoint, DisplayMode, IngestionStatus, ZoomTransform};

/// Everything that can change the chart state. Handled exhaustively; there
/// is no reject path and no update can fail.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    /// One-shot delivery of the aggregated series from the ingestion task.
    SeriesLoaded { trees: Vec<DailyPoint> },
    /// The ingestion task's fetch or decode failed; the series stays empty.
    IngestionFailed,
    /// User pan/zoom gesture produced a new transform.
    Zoomed { transform: ZoomTransform },
    /// The chart container changed size.
    Resized { width: f32, height: f32 },
    /// User picked a y-axis display mode.
    DisplayModeChanged { option: DisplayMode },
}

impl ChartState {
    /// Applies one event, returning the next state. Total over all events.
    pub fn apply(mut self, event: ChartEvent) -> ChartState {
        match event {
            ChartEvent::SeriesLoaded { trees } => {
                // Wholesale replacement; transform and viewport are left
                // alone so a late delivery cannot clobber earlier gestures.
                self.series = trees;
                self.ingestion = IngestionStatus::Loaded;
            }
            ChartEvent::IngestionFailed => {
                self.ingestion = IngestionStatus::Failed;
            }
            ChartEvent::Zoomed { transform } => {
                // Vertical pan is locked: y is deliberately not copied, so
                // the chart always shows its full vertical range.
                self.transform.k = transform.k.max(1.0);
                self.transform.x = transform.x;
            }
            ChartEvent::Resized { width, height } => {
                // Rescale the pan offset proportionally so the visible
                // window stays put under a live resize. A zero or garbage
                // prior width makes the ratio non-finite; skip the rescale
                // but still record the new dimensions.
                let scale = width as f64 / self.viewport.width as f64;
                if scale.is_finite() {
                    self.transform.x *= scale;
                }
                self.viewport.width = width;
                self.viewport.height = height;
            }
            ChartEvent::DisplayModeChanged { option } => {
                self.display_mode = option;
            }
        }
        self
    }
}

/// Owns the [`ChartState`] and drains the event channel one event at a time.
///
/// Consumers (scale computation, hit-testing, rendering) observe the state
/// through the watch receiver and never mutate it.
pub struct ChartStore {
    state: ChartState,
    events: mpsc::Receiver<ChartEvent>,
    snapshot: watch::Sender<ChartState>,
}

impl ChartStore {
    pub fn new(buffer: usize) -> (Self, mpsc::Sender<ChartEvent>, watch::Receiver<ChartState>) {
        let (tx, rx) = mpsc::channel(buffer);
        let state = ChartState::default();
        let (snapshot_tx, snapshot_rx) = watch::channel(state.clone());
        let store = Self {
            state,
            events: rx,
            snapshot: snapshot_tx,
        };
        (store, tx, snapshot_rx)
    }

    /// Runs until every event sender is dropped.
    pub async fn run(mut self) {
        while let Some(event) = self.events.recv().await {
            match &event {
                ChartEvent::SeriesLoaded { trees } => {
                    debug!(days = trees.len(), "series loaded");
                }
                ChartEvent::IngestionFailed => {
                    warn!("ingestion failed; chart will stay empty");
                }
                _ => {}
            }
            self.state = std::mem::take(&mut self.state).apply(event);
            self.snapshot.send_replace(self.state.clone());
        }
    }
}
