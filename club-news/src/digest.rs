//! Telegram-HTML renderings of everything the bot says.

use crate::types::NewsItem;
use chrono::{DateTime, Locale, TimeZone};
use std::fmt::Display;

pub const HEADER: &str = "📰 <b>NOTICIAS DEL RACING</b> ⚽";
pub const NO_NEWS: &str = "😔 No se encontraron noticias nuevas del Racing hoy.";
pub const SIGN_OFF: &str = "💚🤍 <b>¡HALA RACING!</b> 🤍💚";
pub const SEARCHING: &str = "🔍 Buscando noticias del Racing...";
pub const SELF_CHECK_OK: &str = "Bot funcionando";
pub const APOLOGY: &str =
    "❌ Error técnico obteniendo noticias.\n🔄 Intentaré más tarde.\n\n💚🤍 ¡HALA RACING! 🤍💚";

/// Long Spanish date, e.g. "domingo, 18 de octubre de 2026"
pub fn long_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format_localized("%A, %-d de %B de %Y", Locale::es_ES)
        .to_string()
}

/// Short Spanish timestamp, e.g. "18/10/2026, 9:05:03"
pub fn timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%-d/%-m/%Y, %-H:%M:%S").to_string()
}

/// Renders the daily news message.
///
/// `now` only contributes the date line; the output is otherwise a pure
/// function of `items`.
pub fn format_news_message<Tz>(items: &[NewsItem], now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut message = String::new();
    message.push_str(HEADER);
    message.push('\n');
    message.push_str(&format!("📅 {}\n\n", long_date(now)));

    if items.is_empty() {
        message.push_str(NO_NEWS);
        message.push_str("\n\n");
    } else {
        for (i, item) in items.iter().enumerate() {
            message.push_str(&format!("🔸 <b>{}. {}</b>\n", i + 1, escape_html(&item.title)));
            message.push_str(&format!(
                "🔗 <a href=\"{}\">Leer más</a>\n\n",
                escape_html(&item.link)
            ));
        }
    }

    message.push_str(SIGN_OFF);
    message
}

pub fn welcome_message(user_name: &str) -> String {
    format!(
        "⚽ ¡Hola <b>{}</b>!\n\n\
         Soy el bot del Racing de Santander 💚🤍\n\n\
         🕘 <b>Noticias automáticas:</b> 9:00 AM diario\n\
         📰 <b>Comandos:</b>\n\
         • /noticias - Últimas noticias\n\
         • /test - Comprobar bot\n\n\
         {}",
        escape_html(user_name),
        SIGN_OFF
    )
}

pub fn self_check_message<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "🧪 <b>TEST DEL BOT</b>\n\n\
         ✅ {}\n\
         📅 {}\n\
         🤖 Sistema: OK\n\n\
         💚🤍 <b>¡Todo perfecto!</b> 🤍💚",
        SELF_CHECK_OK,
        timestamp(now)
    )
}

/// Escapes the characters Telegram's HTML parse mode treats as markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
