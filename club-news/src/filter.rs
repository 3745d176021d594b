use crate::types::{NewsCollection, NewsItem};
use tracing::debug;

/// Keyword-based relevance check plus title de-duplication.
///
/// A title is relevant when it mentions the club token and either the
/// location token or the word "club". This is a lightweight heuristic and
/// both misses and false hits are expected.
#[derive(Debug, Clone)]
pub struct NewsFilter {
    club_token: String,
    location_token: String,
}

impl NewsFilter {
    pub fn new(club_token: impl Into<String>, location_token: impl Into<String>) -> Self {
        Self {
            club_token: club_token.into().to_lowercase(),
            location_token: location_token.into().to_lowercase(),
        }
    }

    pub fn is_relevant(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        let mentions_club = title.contains(&self.club_token);
        let mentions_place = title.contains(&self.location_token) || title.contains("club");
        mentions_club && mentions_place
    }

    /// Moves relevant, not-yet-seen items into `collection` until it is full.
    /// Returns the items that were accepted, in arrival order.
    pub fn accept(&self, items: Vec<NewsItem>, collection: &mut NewsCollection) -> Vec<NewsItem> {
        let mut accepted = Vec::new();

        for item in items {
            if collection.is_full() {
                break;
            }
            if !self.is_relevant(&item.title) {
                debug!("Discarding unrelated item: {}", item.title);
                continue;
            }
            if collection.try_push(item.clone()) {
                accepted.push(item);
            } else {
                debug!("Discarding duplicate item: {}", item.title);
            }
        }

        accepted
    }
}

impl Default for NewsFilter {
    fn default() -> Self {
        Self::new("racing", "santander")
    }
}
