use chrono::NaiveDate;

use crate::domain::{FeedItem, FetchResult, SourceKey};
use crate::presentation::date_label::published_label;

/// Cause shown when a failed fetch carries no message
pub const DEFAULT_ERROR_CAUSE: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub published_at: String,
    /// Label of the publisher the item's own link points at
    pub source: String,
}

impl DisplayItem {
    /// Links left empty, or set to the literal "link" placeholder, cannot be shared.
    pub fn is_shareable(&self) -> bool {
        !self.link.is_empty() && !self.link.eq_ignore_ascii_case("link")
    }

    pub fn published_label(&self, today: NaiveDate) -> String {
        published_label(&self.published_at, &self.link, today)
    }
}

impl From<FeedItem> for DisplayItem {
    fn from(item: FeedItem) -> Self {
        let source = SourceKey::classify(&item.link).label().to_string();

        Self {
            title: item.title,
            description: item.description,
            link: item.link,
            published_at: item.published_at,
            source,
        }
    }
}

/// What the news list shows. Replaced wholesale on every update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Loading,
    Content(Vec<DisplayItem>),
    Error {
        items: Option<Vec<DisplayItem>>,
        cause: String,
    },
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Items to render, if any; an error state may still carry cached items.
    pub fn items(&self) -> Option<&[DisplayItem]> {
        match self {
            UiState::Loading => None,
            UiState::Content(items) => Some(items.as_slice()),
            UiState::Error { items, .. } => items.as_deref(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Error { cause, .. } => Some(cause.as_str()),
            _ => None,
        }
    }
}

fn map_items(items: Vec<FeedItem>) -> Vec<DisplayItem> {
    items.into_iter().map(DisplayItem::from).collect()
}

impl From<FetchResult> for UiState {
    fn from(result: FetchResult) -> Self {
        match result {
            FetchResult::Success(items) => UiState::Content(map_items(items)),
            FetchResult::Error { items, cause } => UiState::Error {
                items: items.map(map_items),
                cause: cause.unwrap_or_else(|| DEFAULT_ERROR_CAUSE.to_string()),
            },
        }
    }
}
