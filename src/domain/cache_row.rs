use super::{FeedItem, SourceKey};

/// The last successful item list persisted for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRow {
    pub source_key: SourceKey,
    pub items: Vec<FeedItem>,
    pub updated_at: Option<String>,
}

impl CacheRow {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
