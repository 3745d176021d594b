use crate::aggregator::NewsAggregator;
use crate::digest;
use crate::traits::Messenger;
use crate::types::{CommandOutcome, CycleReport, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Local time zone for dates shown to users and for the daily schedule
pub const TIME_ZONE: Tz = chrono_tz::Europe::Madrid;

/// Chat commands the bot answers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    News,
    Test,
    Unknown,
}

impl Command {
    /// Maps chat text to a command. Matching is case-insensitive and a
    /// trailing `@botname` mention is ignored.
    pub fn parse(text: &str) -> Self {
        let text = text.trim().to_lowercase();
        let name = text.split('@').next().unwrap_or_default();

        match name {
            "/start" => Command::Start,
            "/noticias" | "/news" => Command::News,
            "/test" => Command::Test,
            _ => Command::Unknown,
        }
    }
}

/// Ties fetching, formatting and delivery together
pub struct NewsBot {
    aggregator: NewsAggregator,
    messenger: Arc<dyn Messenger>,
    default_chat: String,
}

impl NewsBot {
    pub fn new(
        aggregator: NewsAggregator,
        messenger: Arc<dyn Messenger>,
        default_chat: impl Into<String>,
    ) -> Self {
        Self {
            aggregator,
            messenger,
            default_chat: default_chat.into(),
        }
    }

    fn now() -> DateTime<Tz> {
        Utc::now().with_timezone(&TIME_ZONE)
    }

    /// Fetches, formats and sends the news to `chat_id`. Returns the number
    /// of news items delivered.
    async fn deliver_news(&self, chat_id: &str) -> Result<usize> {
        let news = self.aggregator.fetch().await;
        let message = digest::format_news_message(news.as_slice(), &Self::now());
        self.messenger.send_message(chat_id, &message).await?;
        Ok(news.len())
    }

    /// Sends the daily news to the default chat.
    ///
    /// Never returns an error: if the cycle fails one apology message is
    /// attempted, and a failure of that is only logged.
    pub async fn run_daily_cycle(&self) -> CycleReport {
        info!("Sending daily news");

        match self.deliver_news(&self.default_chat).await {
            Ok(news_count) => {
                info!("Daily news sent: {} items", news_count);
                CycleReport::Delivered { news_count }
            }
            Err(e) => {
                error!("Error sending daily news: {}", e);
                match self
                    .messenger
                    .send_message(&self.default_chat, digest::APOLOGY)
                    .await
                {
                    Ok(()) => CycleReport::FallbackDelivered,
                    Err(e) => {
                        error!("Could not send the error notice: {}", e);
                        CycleReport::Failed
                    }
                }
            }
        }
    }

    pub async fn handle_command(
        &self,
        command: Command,
        reply_target: &str,
        user_name: &str,
    ) -> CommandOutcome {
        info!("Command {:?} from {}", command, user_name);

        let result = match command {
            Command::Start => {
                self.messenger
                    .send_message(reply_target, &digest::welcome_message(user_name))
                    .await
            }
            Command::News => self.reply_with_news(reply_target).await,
            Command::Test => {
                self.messenger
                    .send_message(reply_target, &digest::self_check_message(&Self::now()))
                    .await
            }
            Command::Unknown => return CommandOutcome::Ignored,
        };

        if let Err(e) = result {
            warn!("Error handling {:?} command: {}", command, e);
        }
        CommandOutcome::Replied
    }

    async fn reply_with_news(&self, chat_id: &str) -> Result<()> {
        if let Err(e) = self.messenger.send_message(chat_id, digest::SEARCHING).await {
            warn!("Could not send searching notice: {}", e);
        }
        self.deliver_news(chat_id).await.map(|_| ())
    }
}
