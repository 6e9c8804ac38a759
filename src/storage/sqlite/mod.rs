mod connection;
mod news_cache_repository;

pub use connection::SqliteStorage;
pub use news_cache_repository::SqliteNewsCacheRepository;
