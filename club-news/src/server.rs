use crate::bot::{Command, NewsBot, TIME_ZONE};
use crate::digest;
use crate::types::{CycleReport, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};

const DEFAULT_USER_NAME: &str = "Racinguista";

/// The subset of a Telegram `Update` the bot reads
#[derive(Debug, Deserialize)]
pub struct Update {
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub text: Option<String>,
    pub chat: Chat,
    pub from: Option<Sender>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct Sender {
    pub first_name: Option<String>,
}

pub fn router(bot: Arc<NewsBot>) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/send-news", get(send_news))
        .route("/webhook", post(webhook))
        .with_state(bot)
}

pub async fn serve(bot: Arc<NewsBot>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Bot started on port {}", port);
    axum::serve(listener, router(bot)).await?;
    Ok(())
}

async fn status() -> Json<Value> {
    Json(json!({
        "status": "✅ Racing News Bot activo",
        "time": digest::timestamp(&Utc::now().with_timezone(&TIME_ZONE)),
        "message": "⚽ ¡HALA RACING! 💚🤍"
    }))
}

async fn send_news(State(bot): State<Arc<NewsBot>>) -> Json<Value> {
    let report = bot.run_daily_cycle().await;
    let body = match report {
        CycleReport::Delivered { news_count } => json!({
            "success": true,
            "message": "Noticias enviadas",
            "news_count": news_count
        }),
        CycleReport::FallbackDelivered => json!({
            "success": false,
            "error": "No se pudieron enviar las noticias; se notificó el error al chat"
        }),
        CycleReport::Failed => json!({
            "success": false,
            "error": "No se pudo entregar ningún mensaje"
        }),
    };
    Json(body)
}

/// Telegram always gets a 200, even for updates the bot ignores
async fn webhook(State(bot): State<Arc<NewsBot>>, body: Bytes) -> StatusCode {
    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            debug!("Ignoring unreadable update: {}", e);
            return StatusCode::OK;
        }
    };

    let Some(message) = update.message else {
        return StatusCode::OK;
    };
    let Some(text) = message.text.as_deref() else {
        return StatusCode::OK;
    };

    let user_name = message
        .from
        .and_then(|f| f.first_name)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());
    let chat_id = message.chat.id.to_string();

    debug!("Update text {:?} from chat {}", text, chat_id);
    bot.handle_command(Command::parse(text), &chat_id, &user_name)
        .await;

    StatusCode::OK
}
