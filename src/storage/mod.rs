pub mod traits;
pub mod sqlite;

pub use traits::NewsCacheRepository;
pub use sqlite::{SqliteNewsCacheRepository, SqliteStorage};
