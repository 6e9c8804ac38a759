pub mod cache_row;
pub mod feed_item;
pub mod fetch_result;
pub mod source_key;

pub use cache_row::CacheRow;
pub use feed_item::FeedItem;
pub use fetch_result::FetchResult;
pub use source_key::SourceKey;
