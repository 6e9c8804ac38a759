use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::FeedItem;
use crate::errors::{NewsError, NewsResult};
use crate::sources::traits::FeedSource;

/// Default deadline for a whole request, connect included
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "rss")]
pub struct Rss {
    #[serde(default)]
    pub channel: Option<Channel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Channel {
    #[serde(rename = "item", default)]
    pub items: Option<Vec<Item>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
}

impl Rss {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            channel: Some(Channel { items: Some(items) }),
        }
    }

    /// The channel's items, or `None` when the document has no channel or
    /// the channel has no item elements.
    pub fn into_items(self) -> Option<Vec<FeedItem>> {
        self.channel
            .and_then(|c| c.items)
            .map(|items| items.into_iter().map(FeedItem::from).collect())
    }
}

impl From<Item> for FeedItem {
    fn from(item: Item) -> Self {
        FeedItem::new(item.title.trim(), item.link.trim())
            .with_description(item.description)
            .with_published_at(item.pub_date.trim())
    }
}

pub struct HttpFeedSource {
    client: Client,
}

impl HttpFeedSource {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    pub fn parse(body: &str) -> NewsResult<Rss> {
        Ok(quick_xml::de::from_str(body)?)
    }
}

impl Default for HttpFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_rss(&self, url: &str) -> NewsResult<Rss> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Self::parse(&body)
    }
}
