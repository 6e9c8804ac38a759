use std::sync::Arc;

use futures::stream::BoxStream;

use crate::domain::{CacheRow, FeedItem, FetchResult, SourceKey};
use crate::errors::{NewsError, NewsResult};
use crate::sources::FeedSource;
use crate::storage::NewsCacheRepository;

/// Produces the result sequence for one feed request.
#[cfg_attr(test, mockall::automock)]
pub trait NewsRepository: Send + Sync {
    /// Yields the cached snapshot first (when non-empty), then the outcome
    /// of the network fetch. The stream ends after one or two items.
    /// Fresh items are already persisted when their `Success` is yielded.
    fn fetch(&self, url: &str) -> BoxStream<'static, FetchResult>;
}

/// Read-through cache in front of a [`FeedSource`].
pub struct CachedNewsRepository<S: FeedSource, C: NewsCacheRepository> {
    source: Arc<S>,
    cache: Arc<C>,
}

impl<S, C> CachedNewsRepository<S, C>
where
    S: FeedSource + 'static,
    C: NewsCacheRepository + 'static,
{
    pub fn new(source: S, cache: C) -> Self {
        Self {
            source: Arc::new(source),
            cache: Arc::new(cache),
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }
}

impl<S, C> NewsRepository for CachedNewsRepository<S, C>
where
    S: FeedSource + 'static,
    C: NewsCacheRepository + 'static,
{
    fn fetch(&self, url: &str) -> BoxStream<'static, FetchResult> {
        let source = Arc::clone(&self.source);
        let cache = Arc::clone(&self.cache);
        let url = url.to_string();

        Box::pin(async_stream::stream! {
            let key = SourceKey::classify(&url);

            let cached = match read_cache(&cache, key).await {
                Ok(row) => row.map(|r| r.items),
                Err(e) => {
                    tracing::warn!(source = %key, error = %e, "Failed to read news cache");
                    None
                }
            };

            if let Some(items) = cached.as_ref().filter(|items| !items.is_empty()) {
                tracing::debug!(source = %key, count = items.len(), "Serving cached news");
                yield FetchResult::Success(items.clone());
            }

            let rss = match source.fetch_rss(&url).await {
                Ok(rss) => rss,
                Err(e) => {
                    tracing::warn!(source = %key, url = %url, error = %e, "Feed fetch failed");
                    yield FetchResult::error(cached, e);
                    return;
                }
            };

            match rss.into_items() {
                Some(items) if items.is_empty() => {
                    yield FetchResult::Success(items);
                }
                Some(items) => {
                    // Persist before yielding; a consumer may stop polling after this item
                    if let Err(e) = write_cache(&cache, key, items.clone()).await {
                        tracing::warn!(source = %key, error = %e, "Failed to persist news cache");
                    } else {
                        tracing::debug!(source = %key, "Persisted fetched news");
                    }

                    yield FetchResult::Success(items);
                }
                None => {
                    let e = NewsError::MissingItems;
                    tracing::warn!(source = %key, url = %url, error = %e, "Feed has no items");
                    yield FetchResult::error(cached, e);
                }
            }
        })
    }
}

async fn read_cache<C>(cache: &Arc<C>, key: SourceKey) -> NewsResult<Option<CacheRow>>
where
    C: NewsCacheRepository + 'static,
{
    let cache = Arc::clone(cache);
    tokio::task::spawn_blocking(move || cache.get(key)).await?
}

async fn write_cache<C>(cache: &Arc<C>, key: SourceKey, items: Vec<FeedItem>) -> NewsResult<()>
where
    C: NewsCacheRepository + 'static,
{
    let cache = Arc::clone(cache);
    tokio::task::spawn_blocking(move || cache.replace_all(key, &items)).await?
}
