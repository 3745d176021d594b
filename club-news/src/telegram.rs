use crate::traits::Messenger;
use crate::types::{BotError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info};

pub const API_BASE: &str = "https://api.telegram.org";

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram Bot API client
pub struct TelegramClient {
    client: Client,
    api_base: String,
    bot_token: String,
}

impl TelegramClient {
    pub fn new(bot_token: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;
        Ok(Self::with_client(client, API_BASE, bot_token))
    }

    /// Client against another Bot API server, e.g. a self-hosted one
    pub fn with_client(
        client: Client,
        api_base: impl Into<String>,
        bot_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.bot_token, method)
    }

    async fn call(&self, method: &str, body: serde_json::Value) -> Result<()> {
        let resp = self
            .client
            .post(self.method_url(method))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let parsed: Option<ApiResponse> = serde_json::from_str(&text).ok();

        match parsed {
            Some(api) if status.is_success() && api.ok => Ok(()),
            Some(api) => Err(BotError::Telegram {
                description: api.description.unwrap_or_else(|| status.to_string()),
            }),
            None => Err(BotError::Telegram {
                description: format!("{}: {}", status, text),
            }),
        }
    }

    /// Registers the URL Telegram should push updates to
    pub async fn set_webhook(&self, url: &str) -> Result<()> {
        self.call("setWebhook", json!({ "url": url })).await?;
        info!("Webhook configured: {}", url);
        Ok(())
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let body = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "HTML",
            "disable_web_page_preview": true
        });

        match self.call("sendMessage", body).await {
            Ok(()) => {
                info!("Message sent to {}", chat_id);
                Ok(())
            }
            Err(e) => {
                error!("Failed to send message to {}: {}", chat_id, e);
                Err(e)
            }
        }
    }
}
