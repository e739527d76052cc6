use serde::{Deserialize, Serialize};

/// One entry on the scraped index page. A fresh set is produced on every
/// refresh cycle; summaries are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Opaque id handed to callers instead of the source URL.
    pub id: String,
    pub headline: String,
    /// Absolute thumbnail URL, empty when the item has none.
    pub image: String,
}

/// Full article content, computed per request and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub content: String,
    pub image: String,
}
