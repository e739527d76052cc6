use std::sync::Arc;
use std::time::Duration;

use sd_core::{ArticleRegistry, ArticleStore, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};
use url::Url;

use crate::extract;
use crate::fetch::Fetch;

/// One fetch → extract → install pass over the index page.
pub struct Refresher {
    fetcher: Arc<dyn Fetch>,
    store: Arc<ArticleStore>,
    registry: Arc<ArticleRegistry>,
    index_url: Url,
}

impl Refresher {
    pub fn new(
        fetcher: Arc<dyn Fetch>,
        store: Arc<ArticleStore>,
        registry: Arc<ArticleRegistry>,
        index_url: Url,
    ) -> Self {
        Self {
            fetcher,
            store,
            registry,
            index_url,
        }
    }

    /// Run a single refresh cycle, replacing the cached list on success.
    ///
    /// A fetch failure leaves the previously installed list and all registry
    /// entries untouched; the stale list keeps serving until the next tick.
    /// Extraction itself cannot fail — a page without the expected structure
    /// installs an empty list.
    pub async fn refresh(&self) -> Result<usize> {
        let markup = self.fetcher.fetch(self.index_url.as_str()).await?;
        let articles = extract::index(&markup, &self.index_url, &self.registry);
        let count = articles.len();
        self.store.install(articles);
        Ok(count)
    }
}

/// Periodic driver of the refresh pipeline: one cycle at startup, then one
/// per interval tick, until `shutdown` is called.
pub struct RefreshScheduler {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl RefreshScheduler {
    /// Spawn the background task. The first tick fires immediately, covering
    /// the unconditional startup scrape; cycle failures are logged and
    /// swallowed so the task keeps running.
    pub fn start(refresher: Refresher, interval: Duration) -> Self {
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match refresher.refresh().await {
                            Ok(count) => {
                                info!("📰 Articles scraped successfully ({} articles)", count)
                            }
                            Err(e) => warn!("Error fetching index page: {}", e),
                        }
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }
        });

        Self { shutdown, handle }
    }

    /// Stop the periodic task and wait for it to exit. An in-flight cycle
    /// finishes before the task observes the signal.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}
