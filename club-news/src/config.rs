use crate::types::{BotError, Result};
use tracing::info;

pub const DEFAULT_BOT_TOKEN: &str = "TU_TOKEN_AQUI";
pub const DEFAULT_CHAT_ID: &str = "TU_ID_DEL_GRUPO";
pub const DEFAULT_PORT: u16 = 3000;

/// Ordered search terms, tried until enough news has been collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new([
            "Racing Santander",
            "\"Racing de Santander\"",
            "Real Racing Club Santander",
        ])
    }
}

/// Process-wide settings, read once at start-up and never mutated.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub port: u16,
    pub public_domain: Option<String>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| BotError::Config(format!("PORT is not a valid port: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        let config = Self {
            bot_token: std::env::var("BOT_TOKEN").unwrap_or_else(|_| DEFAULT_BOT_TOKEN.to_string()),
            chat_id: std::env::var("CHAT_ID").unwrap_or_else(|_| DEFAULT_CHAT_ID.to_string()),
            port,
            public_domain: std::env::var("RAILWAY_PUBLIC_DOMAIN")
                .ok()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        };

        config.log_status();
        Ok(config)
    }

    /// Length-based check that a real token was configured
    pub fn has_bot_token(&self) -> bool {
        self.bot_token.len() > 10 && self.bot_token != DEFAULT_BOT_TOKEN
    }

    /// Length-based check that a real chat id was configured
    pub fn has_chat_id(&self) -> bool {
        self.chat_id.len() > 3 && self.chat_id != DEFAULT_CHAT_ID
    }

    pub fn webhook_url(&self) -> Option<String> {
        self.public_domain
            .as_ref()
            .map(|domain| format!("https://{}/webhook", domain))
    }

    fn log_status(&self) {
        fn mark(ok: bool) -> &'static str {
            if ok { "✅" } else { "❌" }
        }
        info!("Token configured: {}", mark(self.has_bot_token()));
        info!("Chat ID configured: {}", mark(self.has_chat_id()));
    }
}
