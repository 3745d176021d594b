use crate::traits::FeedSource;
use crate::types::{BotError, FetchConfig, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info};
use url::Url;

/// HTTP client for the Google News RSS search endpoint
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, config })
    }

    /// Builds the search URL with the term URL-encoded as `q`
    pub fn search_url(&self, term: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("q", term);
            for (key, value) in &self.config.locale_params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub async fn fetch_feed(&self, url: Url) -> Result<String> {
        let start_time = Instant::now();
        debug!("Fetching feed: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(BotError::Feed(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let content = response.text().await?;
        info!(
            "Fetched feed: {} ({} bytes in {} ms)",
            url,
            content.len(),
            start_time.elapsed().as_millis()
        );
        Ok(content)
    }
}

#[async_trait]
impl FeedSource for Fetcher {
    fn source_name(&self) -> String {
        Url::parse(&self.config.base_url)
            .ok()
            .and_then(|u| u.domain().map(|d| format!("RSS search ({})", d)))
            .unwrap_or_else(|| "RSS search".to_string())
    }

    async fn search(&self, term: &str) -> Result<String> {
        let url = self.search_url(term)?;
        self.fetch_feed(url).await
    }
}
