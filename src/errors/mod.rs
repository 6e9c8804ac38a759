use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Feed errors
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("items are null")]
    MissingItems,

    // Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Cache serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(String),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<quick_xml::DeError> for NewsError {
    fn from(err: quick_xml::DeError) -> Self {
        NewsError::FeedParse(err.to_string())
    }
}

impl From<tokio::task::JoinError> for NewsError {
    fn from(err: tokio::task::JoinError) -> Self {
        NewsError::Task(err.to_string())
    }
}

pub type NewsResult<T> = Result<T, NewsError>;
