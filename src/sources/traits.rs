use async_trait::async_trait;

use crate::errors::NewsResult;
use crate::sources::rss::Rss;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Download and deserialize the RSS document at `url`
    async fn fetch_rss(&self, url: &str) -> NewsResult<Rss>;
}
