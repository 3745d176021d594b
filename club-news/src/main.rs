use clap::Parser;
use club_news::{
    scheduler, server, BotConfig, DailySchedule, FetchConfig, Fetcher, NewsAggregator, NewsBot,
    NewsFilter, SearchQuery, TelegramClient,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "club-news", about = "Daily Racing de Santander news for Telegram")]
struct Cli {
    /// Port for the HTTP server (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Run one news cycle and exit instead of serving
    #[arg(long)]
    send_now: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may carry RUST_LOG, so it is loaded before the filter is built
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!("Racing news bot starting");

    let config = BotConfig::from_env()?;
    let port = cli.port.unwrap_or(config.port);

    let source = Arc::new(Fetcher::new(FetchConfig::default())?);
    let aggregator = NewsAggregator::new(source, SearchQuery::default(), NewsFilter::default());
    let telegram = Arc::new(TelegramClient::new(config.bot_token.clone())?);
    let bot = Arc::new(NewsBot::new(aggregator, telegram.clone(), config.chat_id.clone()));

    if cli.send_now {
        let report = bot.run_daily_cycle().await;
        if report.is_success() {
            info!("Cycle finished: {:?}", report);
        } else {
            warn!("Cycle did not deliver the news: {:?}", report);
        }
        return Ok(());
    }

    tokio::spawn(scheduler::run_daily(bot.clone(), DailySchedule::default()));
    tokio::spawn(scheduler::heartbeat());

    if config.has_bot_token() {
        match config.webhook_url() {
            Some(url) => {
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    if let Err(e) = telegram.set_webhook(&url).await {
                        error!("Webhook setup failed: {}", e);
                    }
                });
            }
            None => warn!("RAILWAY_PUBLIC_DOMAIN not set, webhook not registered"),
        }
    }

    server::serve(bot, port).await?;
    Ok(())
}
