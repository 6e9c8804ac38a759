pub mod news_repository;

pub use news_repository::{CachedNewsRepository, NewsRepository};
