use std::time::Duration;

use crate::errors::{NewsError, NewsResult};
use crate::sources::rss::DEFAULT_TIMEOUT;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub http_timeout: Duration,
    pub log_filter: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        // Default db_path is relative to executable directory
        let db_path = std::env::var("HEADLINES_DB_PATH").unwrap_or_else(|_| {
            exe_dir
                .map(|d| d.join("headlines.db").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./headlines.db".to_string())
        });

        let http_timeout =
            parse_timeout(std::env::var("HEADLINES_HTTP_TIMEOUT_SECS").ok().as_deref())?;

        let log_filter = std::env::var("HEADLINES_LOG")
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            db_path,
            http_timeout,
            log_filter,
        })
    }
}

fn parse_timeout(value: Option<&str>) -> NewsResult<Duration> {
    let Some(value) = value else {
        return Ok(DEFAULT_TIMEOUT);
    };

    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(NewsError::Config(format!(
            "HEADLINES_HTTP_TIMEOUT_SECS must be a positive number of seconds, got {:?}",
            value
        ))),
    }
}
