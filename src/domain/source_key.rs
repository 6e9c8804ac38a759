use serde::{Deserialize, Serialize};

/// Coarse publisher identifier derived from a feed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceKey {
    Dd,
    Air,
    Toi,
    EconomicTimes,
}

impl SourceKey {
    pub const ALL: [SourceKey; 4] = [
        SourceKey::Dd,
        SourceKey::Air,
        SourceKey::Toi,
        SourceKey::EconomicTimes,
    ];

    /// Classify a URL by case-insensitive substring match.
    ///
    /// Order matters: "dd" is checked before "newsonair", which is checked
    /// before "timesofindia". An empty URL maps to `Dd`; anything that
    /// matches nothing maps to `EconomicTimes`.
    pub fn classify(url: &str) -> SourceKey {
        let url = url.to_lowercase();

        if url.contains("dd") {
            SourceKey::Dd
        } else if url.contains("newsonair") {
            SourceKey::Air
        } else if url.contains("timesofindia") {
            SourceKey::Toi
        } else if url.is_empty() {
            SourceKey::Dd
        } else {
            SourceKey::EconomicTimes
        }
    }

    /// Name of the cache slot for this source
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKey::Dd => "DD",
            SourceKey::Air => "AIR",
            SourceKey::Toi => "TOI",
            SourceKey::EconomicTimes => "ECONOMIC_TIMES",
        }
    }

    /// Label attached to display items
    pub fn label(&self) -> &'static str {
        match self {
            SourceKey::Dd => "dd",
            SourceKey::Air => "newsonair",
            SourceKey::Toi => "timesofindia",
            SourceKey::EconomicTimes => "economictimes",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SourceKey::Dd => "DD News",
            SourceKey::Air => "All India Radio",
            SourceKey::Toi => "Times of India",
            SourceKey::EconomicTimes => "Economic Times",
        }
    }

    pub fn feed_url(&self) -> &'static str {
        match self {
            SourceKey::Dd => "https://ddnews.gov.in/rss-feeds",
            SourceKey::Air => "https://www.newsonair.gov.in/top_rss.aspx",
            SourceKey::Toi => "https://timesofindia.indiatimes.com/rssfeedstopstories.cms",
            SourceKey::EconomicTimes => {
                "https://economictimes.indiatimes.com/rssfeedstopstories.cms"
            }
        }
    }
}

impl std::str::FromStr for SourceKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dd" => Ok(SourceKey::Dd),
            "air" | "newsonair" => Ok(SourceKey::Air),
            "toi" | "timesofindia" => Ok(SourceKey::Toi),
            "et" | "economic_times" | "economictimes" => Ok(SourceKey::EconomicTimes),
            _ => Err(format!("Unknown news source: {}", s)),
        }
    }
}

impl std::fmt::Display for SourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
