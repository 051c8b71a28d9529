//! One-shot ingestion of the remote planting-event feed.

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::aggregation::aggregate;
use crate::data_types::{DailyPoint, TreeEvent};
use crate::store::ChartEvent;

/// The fixed feed endpoint: a JSON array of `{createdAt, value}` objects,
/// no pagination, no auth.
pub const FEED_URL: &str = "https://public.offset.earth/trees";

/// Source of raw planting events. Seam for tests and alternative feeds.
#[async_trait]
pub trait EventFeed: Send + Sync {
    async fn fetch(&self) -> Result<Vec<TreeEvent>>;
}

/// Production feed: a single best-effort HTTP GET.
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpFeed {
    pub fn new() -> Self {
        Self::with_url(FEED_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Default for HttpFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventFeed for HttpFeed {
    async fn fetch(&self) -> Result<Vec<TreeEvent>> {
        let events = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<TreeEvent>>()
            .await
            .wrap_err("decoding planting event feed")?;
        Ok(events)
    }
}

/// Fetches the feed once and aggregates it into the daily series.
pub async fn ingest(feed: &dyn EventFeed) -> Result<Vec<DailyPoint>> {
    let events = feed.fetch().await?;
    Ok(aggregate(events))
}

/// Runs the ingestion to completion, delivering exactly one event into the
/// store channel: `SeriesLoaded` on success, `IngestionFailed` otherwise.
/// No retry, no cancellation, no progress reporting.
pub async fn run_ingestion(feed: impl EventFeed, events: mpsc::Sender<ChartEvent>) {
    let delivery = match ingest(&feed).await {
        Ok(trees) => {
            info!(days = trees.len(), "planting feed ingested");
            ChartEvent::SeriesLoaded { trees }
        }
        Err(error) => {
            warn!(%error, "planting feed ingestion failed");
            ChartEvent::IngestionFailed
        }
    };
    // A dropped receiver means the store is gone; nothing left to deliver.
    let _ = events.send(delivery).await;
}

/// Spawns the one-shot ingestion off the interaction path.
pub fn spawn_ingestion(
    feed: impl EventFeed + 'static,
    events: mpsc::Sender<ChartEvent>,
) -> JoinHandle<()> {
    tokio::spawn(run_ingestion(feed, events))
}
