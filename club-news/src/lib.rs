pub mod types;
pub mod config;
pub mod traits;
pub mod fetcher;
pub mod parser;
pub mod filter;
pub mod aggregator;
pub mod digest;
pub mod telegram;
pub mod bot;
pub mod scheduler;
pub mod server;

pub use types::*;
pub use config::{BotConfig, SearchQuery};
pub use traits::{FeedSource, Messenger};
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use filter::NewsFilter;
pub use aggregator::NewsAggregator;
pub use telegram::TelegramClient;
pub use bot::{Command, NewsBot};
pub use scheduler::DailySchedule;
