use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Maximum number of news items delivered in one message
pub const MAX_NEWS_ITEMS: usize = 5;

/// Upper bound on entries extracted from a single feed payload
pub const MAX_FEED_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub published_at: Option<String>,
}

/// Ordered set of news items, unique by title and bounded by a fixed capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsCollection {
    items: Vec<NewsItem>,
}

impl NewsCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_NEWS_ITEMS
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.items.iter().any(|existing| existing.title == title)
    }

    /// Appends the item unless the collection is full or the title is
    /// already present. Returns whether the item was stored.
    pub fn try_push(&mut self, item: NewsItem) -> bool {
        if self.is_full() || self.contains_title(&item.title) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NewsItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[NewsItem] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a NewsCollection {
    type Item = &'a NewsItem;
    type IntoIter = std::slice::Iter<'a, NewsItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub base_url: String,
    /// Extra query parameters pinning the feed's language and region
    pub locale_params: Vec<(String, String)>,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; RacingBot/1.0)".to_string(),
            timeout_seconds: 15,
            base_url: "https://news.google.com/rss/search".to_string(),
            locale_params: vec![
                ("hl".to_string(), "es".to_string()),
                ("gl".to_string(), "ES".to_string()),
                ("ceid".to_string(), "ES:es".to_string()),
            ],
        }
    }
}

/// Outcome of one fetch-format-deliver cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleReport {
    Delivered { news_count: usize },
    FallbackDelivered,
    Failed,
}

impl CycleReport {
    pub fn is_success(&self) -> bool {
        matches!(self, CycleReport::Delivered { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Replied,
    Ignored,
}

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Telegram API error: {description}")]
    Telegram { description: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
