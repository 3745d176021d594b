#![allow(dead_code)]

use async_trait::async_trait;
use club_news::{
    BotError, FeedSource, Messenger, NewsAggregator, NewsBot, NewsFilter, Result, SearchQuery,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Builds a Google News style RSS document from (title, link) pairs
pub fn rss_feed(items: &[(&str, &str)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
<channel>
<title>"Racing Santander" - Google News</title>
<link>https://news.google.com/search?q=Racing+Santander</link>
<description>Google News</description>
"#,
    );
    for (title, link) in items {
        xml.push_str(&format!(
            "<item><title><![CDATA[{}]]></title><link>{}</link>\
             <pubDate>Sun, 18 Oct 2026 07:00:00 GMT</pubDate></item>\n",
            title, link
        ));
    }
    xml.push_str("</channel>\n</rss>\n");
    xml
}

pub enum FakeResponse {
    Feed(String),
    Timeout,
}

/// Feed source answering from a fixed table; unknown terms fail
#[derive(Default)]
pub struct FakeFeedSource {
    responses: HashMap<String, FakeResponse>,
    calls: Mutex<Vec<String>>,
}

impl FakeFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, term: &str, feed: String) -> Self {
        self.responses.insert(term.to_string(), FakeResponse::Feed(feed));
        self
    }

    pub fn with_timeout(mut self, term: &str) -> Self {
        self.responses.insert(term.to_string(), FakeResponse::Timeout);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for FakeFeedSource {
    fn source_name(&self) -> String {
        "fake feed".to_string()
    }

    async fn search(&self, term: &str) -> Result<String> {
        self.calls.lock().unwrap().push(term.to_string());
        match self.responses.get(term) {
            Some(FakeResponse::Feed(feed)) => Ok(feed.clone()),
            Some(FakeResponse::Timeout) => Err(BotError::Feed("operation timed out".to_string())),
            None => Err(BotError::Feed(format!("HTTP 503 for {}", term))),
        }
    }
}

/// Messenger that records every send and can be told to fail
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<(String, String)>>,
    failing: bool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    /// Every attempted send as (chat_id, text), including failed ones
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((chat_id.to_string(), text.to_string()));
        if self.failing {
            Err(BotError::Telegram {
                description: "Bad Request: chat not found".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

pub const TERMS: [&str; 3] = [
    "Racing Santander",
    "\"Racing de Santander\"",
    "Real Racing Club Santander",
];

pub fn aggregator(source: Arc<FakeFeedSource>) -> NewsAggregator {
    NewsAggregator::new(source, SearchQuery::new(TERMS), NewsFilter::default())
}

pub fn bot(source: Arc<FakeFeedSource>, messenger: Arc<RecordingMessenger>) -> NewsBot {
    NewsBot::new(aggregator(source), messenger, "-100123")
}
