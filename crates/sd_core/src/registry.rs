use std::collections::HashMap;
use std::sync::RwLock;

/// Mapping from opaque article ids to the source URLs they were scraped from.
///
/// Insert-only: entries from superseded refresh cycles are kept, so ids handed
/// out earlier in the process lifetime keep resolving until restart. An id is
/// never re-registered for a different URL.
#[derive(Debug, Default)]
pub struct ArticleRegistry {
    entries: RwLock<HashMap<String, String>>,
}

impl ArticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, id: String, url: String) {
        self.entries.write().unwrap().insert(id, url);
    }

    /// Look up the source URL for an id. Unknown ids are a typed miss, not an
    /// error.
    pub fn resolve(&self, id: &str) -> Option<String> {
        self.entries.read().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
