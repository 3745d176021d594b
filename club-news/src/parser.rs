use crate::types::{NewsItem, MAX_FEED_ENTRIES};
use feed_rs::parser;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing::{debug, info, warn};

pub struct FeedParser {
    max_entries: usize,
}

impl FeedParser {
    pub fn new() -> Self {
        Self {
            max_entries: MAX_FEED_ENTRIES,
        }
    }

    /// Extracts news items from an RSS/Atom payload.
    ///
    /// Never fails: a payload that cannot be parsed yields no items, and
    /// entries missing a title or link are skipped.
    pub fn parse(&self, content: &str) -> Vec<NewsItem> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = match parser::parse(content.as_bytes()) {
            Ok(feed) => feed,
            Err(e) => {
                warn!("Failed to parse feed: {}", e);
                return Vec::new();
            }
        };

        let mut dates = raw_dates(content).into_iter();
        let items: Vec<NewsItem> = feed
            .entries
            .into_iter()
            .filter_map(|entry| Self::parse_entry(entry, dates.next().flatten()))
            .take(self.max_entries)
            .collect();

        info!("Parsed feed with {} usable entries", items.len());
        items
    }

    fn parse_entry(entry: feed_rs::model::Entry, published_at: Option<String>) -> Option<NewsItem> {
        let raw_title = entry
            .title
            .map(|t| t.content)
            .filter(|t| !t.trim().is_empty());
        let Some(raw_title) = raw_title else {
            debug!("Skipping entry without title");
            return None;
        };
        let title = clean_title(&raw_title);

        let link = entry
            .links
            .first()
            .map(|l| l.href.trim().to_string())
            .filter(|href| !href.is_empty());
        let Some(link) = link else {
            debug!("Skipping entry without link: {}", title);
            return None;
        };

        Some(NewsItem {
            title,
            link,
            published_at,
        })
    }
}

impl Default for FeedParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Publication date text of every `<item>`/`<entry>`, in document order,
/// exactly as written in the feed.
///
/// feed-rs only exposes dates it could parse, so the raw text is read in a
/// second pass. A reader error ends the scan; later entries get no date.
fn raw_dates(content: &str) -> Vec<Option<String>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut dates = Vec::new();
    let mut in_entry = false;
    let mut current: Option<String> = None;
    let mut element = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                element = e.local_name().as_ref().to_vec();
                if matches!(element.as_slice(), b"item" | b"entry") {
                    in_entry = true;
                    current = None;
                }
            }
            Ok(Event::End(e)) => {
                if matches!(e.local_name().as_ref(), b"item" | b"entry") && in_entry {
                    dates.push(current.take());
                    in_entry = false;
                }
                element.clear();
            }
            Ok(Event::Text(e)) if in_entry && current.is_none() => {
                if matches!(element.as_slice(), b"pubDate" | b"published" | b"updated") {
                    let text = e.unescape().unwrap_or_default().trim().to_string();
                    if !text.is_empty() {
                        current = Some(text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                debug!("Stopped reading raw dates: {}", e);
                break;
            }
            _ => {}
        }
    }

    dates
}

/// Strips the trailing " - Publisher" segment aggregators append to titles.
///
/// Only the last segment is removed, and only when it contains no further
/// hyphen, so "Racing gana 2-0 al Cadiz - Diario Sport" keeps its score.
pub fn clean_title(title: &str) -> String {
    let title = title.trim();
    match title.rfind(" - ") {
        Some(idx) if !title[idx + 3..].contains('-') => title[..idx].trim().to_string(),
        _ => title.to_string(),
    }
}
