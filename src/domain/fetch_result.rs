use super::FeedItem;

/// One emission of the feed cache repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Success(Vec<FeedItem>),
    /// A failed attempt, carrying whatever was cached before the attempt
    Error {
        items: Option<Vec<FeedItem>>,
        cause: Option<String>,
    },
}

impl FetchResult {
    pub fn error(items: Option<Vec<FeedItem>>, cause: impl ToString) -> Self {
        let cause = cause.to_string();
        FetchResult::Error {
            items,
            cause: if cause.is_empty() { None } else { Some(cause) },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }
}
