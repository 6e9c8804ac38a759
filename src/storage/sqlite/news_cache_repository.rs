use crate::domain::{CacheRow, FeedItem, SourceKey};
use crate::errors::{NewsError, NewsResult};
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::NewsCacheRepository;

pub struct SqliteNewsCacheRepository {
    storage: SqliteStorage,
}

impl SqliteNewsCacheRepository {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

impl NewsCacheRepository for SqliteNewsCacheRepository {
    fn get(&self, key: SourceKey) -> NewsResult<Option<CacheRow>> {
        let conn = self.storage.connection()?;
        let mut stmt =
            conn.prepare("SELECT items, updated_at FROM news_cache WHERE source_key = ?1")?;

        let row = stmt.query_row([key.as_str()], |row| {
            let items: String = row.get(0)?;
            let updated_at: String = row.get(1)?;
            Ok((items, updated_at))
        });

        match row {
            Ok((items, updated_at)) => {
                let items: Vec<FeedItem> = serde_json::from_str(&items)?;
                Ok(Some(CacheRow {
                    source_key: key,
                    items,
                    updated_at: Some(updated_at),
                }))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(NewsError::from(e)),
        }
    }

    fn replace_all(&self, key: SourceKey, items: &[FeedItem]) -> NewsResult<()> {
        let json = serde_json::to_string(items)?;

        let mut conn = self.storage.connection()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM news_cache WHERE source_key = ?1", [key.as_str()])?;
        tx.execute(
            "INSERT INTO news_cache (source_key, items) VALUES (?1, ?2)",
            (key.as_str(), &json),
        )?;
        tx.commit()?;

        Ok(())
    }

    fn delete_all(&self, key: SourceKey) -> NewsResult<()> {
        let conn = self.storage.connection()?;
        conn.execute("DELETE FROM news_cache WHERE source_key = ?1", [key.as_str()])?;
        Ok(())
    }
}
