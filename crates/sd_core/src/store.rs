use std::sync::{Arc, RwLock};

use crate::types::ArticleSummary;

/// Holds the most recent successful scrape of the index page.
///
/// `install` swaps the whole list behind the lock; readers keep the `Arc`
/// they were handed, so a refresh in progress never shows anyone a partially
/// written list. Starts out empty and stays empty until the first successful
/// cycle.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: RwLock<Arc<Vec<ArticleSummary>>>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current article list. Two calls without an intervening `install`
    /// return the same allocation, not just equal contents.
    pub fn snapshot(&self) -> Arc<Vec<ArticleSummary>> {
        self.articles.read().unwrap().clone()
    }

    /// Replace the cached list with the result of a refresh cycle.
    pub fn install(&self, articles: Vec<ArticleSummary>) {
        *self.articles.write().unwrap() = Arc::new(articles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, headline: &str) -> ArticleSummary {
        ArticleSummary {
            id: id.to_string(),
            headline: headline.to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = ArticleStore::new();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_install_replaces_wholesale() {
        let store = ArticleStore::new();
        store.install(vec![summary("1", "First")]);
        store.install(vec![summary("2", "Second")]);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].headline, "Second");
    }

    #[test]
    fn test_snapshot_is_stable_between_installs() {
        let store = ArticleStore::new();
        store.install(vec![summary("1", "First")]);

        let a = store.snapshot();
        let b = store.snapshot();
        assert!(Arc::ptr_eq(&a, &b));

        store.install(vec![summary("2", "Second")]);
        let c = store.snapshot();
        assert!(!Arc::ptr_eq(&a, &c));
        // The old snapshot is unaffected by the install.
        assert_eq!(a[0].headline, "First");
    }
}
