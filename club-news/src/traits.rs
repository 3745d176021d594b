use crate::types::Result;
use async_trait::async_trait;

/// Source of raw feed payloads for a search term (Google News, or a fake in tests)
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable name for this source
    fn source_name(&self) -> String;

    /// Run one search and return the raw feed document
    async fn search(&self, term: &str) -> Result<String>;
}

/// Outbound message delivery (Telegram Bot API in production)
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send an HTML-formatted message. An `Err` means the message was not delivered.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()>;
}
