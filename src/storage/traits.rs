use crate::domain::{CacheRow, FeedItem, SourceKey};
use crate::errors::NewsResult;

/// Persistent store with one replaceable slot per source.
#[cfg_attr(test, mockall::automock)]
pub trait NewsCacheRepository: Send + Sync {
    fn get(&self, key: SourceKey) -> NewsResult<Option<CacheRow>>;

    /// Delete the slot for `key` then insert `items`; never merges.
    fn replace_all(&self, key: SourceKey, items: &[FeedItem]) -> NewsResult<()>;

    fn delete_all(&self, key: SourceKey) -> NewsResult<()>;
}
