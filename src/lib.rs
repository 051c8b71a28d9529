//! treeline crate: aggregation, pan/zoom scales and hover hit-testing for
//! the planting-events time series chart

pub mod aggregation;
pub mod data_types;
pub mod hit_test;
pub mod ingestion;
pub mod scales;
pub mod store;

pub use aggregation::{aggregate, day_start};
pub use data_types::{
    ChartState, DailyPoint, DisplayMode, IngestionStatus, TreeEvent, Viewport, ZoomTransform,
};
pub use hit_test::nearest;
pub use ingestion::{EventFeed, HttpFeed, spawn_ingestion};
pub use scales::{ChartScale, Scales, compute_scales};
pub use store::{ChartEvent, ChartStore};
