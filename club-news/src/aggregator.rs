use crate::config::SearchQuery;
use crate::filter::NewsFilter;
use crate::parser::FeedParser;
use crate::traits::FeedSource;
use crate::types::NewsCollection;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the configured search terms against a feed source and collects
/// relevant, unique news until the collection is full.
pub struct NewsAggregator {
    source: Arc<dyn FeedSource>,
    parser: FeedParser,
    filter: NewsFilter,
    query: SearchQuery,
}

impl NewsAggregator {
    pub fn new(source: Arc<dyn FeedSource>, query: SearchQuery, filter: NewsFilter) -> Self {
        Self {
            source,
            parser: FeedParser::new(),
            filter,
            query,
        }
    }

    /// Queries every term in priority order and returns what was found.
    ///
    /// A failing term is logged and skipped; it never aborts the terms after
    /// it. Returns an empty collection when every term failed.
    pub async fn fetch(&self) -> NewsCollection {
        let mut news = NewsCollection::new();
        info!(
            "Searching news on {} with {} terms",
            self.source.source_name(),
            self.query.terms().len()
        );

        for term in self.query.terms() {
            info!("Searching: {}", term);

            let content = match self.source.search(term).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("Search for {:?} failed: {}", term, e);
                    continue;
                }
            };

            let items = self.parser.parse(&content);
            let found = items.len();
            let accepted = self.filter.accept(items, &mut news);
            info!(
                "Term {:?}: {} entries, {} accepted ({} collected)",
                term,
                found,
                accepted.len(),
                news.len()
            );

            if news.is_full() {
                break;
            }
        }

        info!("Found {} news items", news.len());
        news
    }
}
