use std::sync::Arc;

use sd_core::{ArticleRegistry, ArticleStore};
use sd_scraper::Fetch;

/// Shared handles to the scrape pipeline's state. The store and registry are
/// the same objects the refresh scheduler writes to; the fetcher is reused
/// for on-demand detail lookups.
pub struct AppState {
    pub store: Arc<ArticleStore>,
    pub registry: Arc<ArticleRegistry>,
    pub fetcher: Arc<dyn Fetch>,
}
